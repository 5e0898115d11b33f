//! # Menu Controller
//!
//! The interactive session is a flat state machine. Each [`Mode`] handler
//! draws its menu, reads one line, and returns the next mode; `run` loops
//! until the operator exits or input runs out. Going "back" always restarts
//! at the main menu instead of resuming where the operator came from.
//!
//! Unknown menu letters and unexpected y/n answers are never errors: the same
//! prompt is simply shown again.

use super::print::{write_message, write_messages};
use super::render::{render_menu, render_receipt, render_table, MAIN_MENU, WAREHOUSE_MENU};
use shopkeep::api::{is_done, CmdMessage, ScanOutcome, ShopApi};
use shopkeep::commands::add_item::normalize_name;
use shopkeep::commands::checkout::DONE_SENTINEL;
use shopkeep::error::{Result, ShopError};
use shopkeep::model::{parse_price, parse_quantity, InventoryItem, SalesRecord};
use shopkeep::store::TabularStore;
use std::io::{self, BufRead, Write};

pub const FAREWELL: &str = "Thank you for using the program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Inventory,
    Sales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    MainMenu,
    WarehouseMenu,
    StoreMode,
    ReportView(Report),
}

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Farewell,
    EndOfInput,
}

enum Step {
    Go(Mode),
    Quit,
}

enum Halt {
    EndOfInput,
    Failed(ShopError),
}

impl From<ShopError> for Halt {
    fn from(err: ShopError) -> Self {
        Halt::Failed(err)
    }
}

impl From<io::Error> for Halt {
    fn from(err: io::Error) -> Self {
        Halt::Failed(ShopError::Io(err))
    }
}

type Flow<T> = std::result::Result<T, Halt>;

pub struct MenuController<I, S, R, W>
where
    I: TabularStore<InventoryItem>,
    S: TabularStore<SalesRecord>,
{
    api: ShopApi<I, S>,
    input: R,
    output: W,
}

impl<I, S, R, W> MenuController<I, S, R, W>
where
    I: TabularStore<InventoryItem>,
    S: TabularStore<SalesRecord>,
    R: BufRead,
    W: Write,
{
    pub fn new(api: ShopApi<I, S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (ShopApi<I, S>, W) {
        (self.api, self.output)
    }

    pub fn run(&mut self) -> Result<Exit> {
        let mut mode = Mode::MainMenu;
        loop {
            let step = match mode {
                Mode::MainMenu => self.main_menu(),
                Mode::WarehouseMenu => self.warehouse_menu(),
                Mode::StoreMode => self.store_mode(),
                Mode::ReportView(report) => self.report_view(report),
            };

            match step {
                Ok(Step::Go(next)) => {
                    if next != mode {
                        tracing::debug!(from = ?mode, to = ?next, "mode change");
                    }
                    mode = next;
                }
                Ok(Step::Quit) => return Ok(Exit::Farewell),
                Err(Halt::EndOfInput) => {
                    tracing::debug!(?mode, "input closed");
                    writeln!(self.output)?;
                    return Ok(Exit::EndOfInput);
                }
                Err(Halt::Failed(err)) => return Err(err),
            }
        }
    }

    fn main_menu(&mut self) -> Flow<Step> {
        write!(self.output, "{}", render_menu(MAIN_MENU))?;
        let next = match self.command("Action: ")?.as_str() {
            "w" => Mode::WarehouseMenu,
            "s" => Mode::StoreMode,
            "t" => Mode::ReportView(Report::Sales),
            "e" => {
                writeln!(self.output, "{}", FAREWELL)?;
                return Ok(Step::Quit);
            }
            _ => Mode::MainMenu,
        };
        Ok(Step::Go(next))
    }

    fn warehouse_menu(&mut self) -> Flow<Step> {
        write!(self.output, "{}", render_menu(WAREHOUSE_MENU))?;
        let next = match self.command("Action: ")?.as_str() {
            "a" => {
                self.add_items()?;
                Mode::WarehouseMenu
            }
            "r" => {
                self.remove_items()?;
                Mode::WarehouseMenu
            }
            "v" => Mode::ReportView(Report::Inventory),
            "b" => Mode::MainMenu,
            _ => Mode::WarehouseMenu,
        };
        Ok(Step::Go(next))
    }

    fn add_items(&mut self) -> Flow<()> {
        loop {
            let name = self.prompt_valid("What item will you add? ", normalize_name)?;
            let quantity = self.prompt_valid("How many will you have in stock? ", parse_quantity)?;
            let price = self.prompt_valid("How much will it cost? ", parse_price)?;

            let result = self.api.add_item(&name, quantity, price)?;
            write_messages(&mut self.output, &result.messages)?;

            if !self.confirm("Do you want to add another item? (y/n): ")? {
                return Ok(());
            }
        }
    }

    fn remove_items(&mut self) -> Flow<()> {
        loop {
            let name = self.prompt("What will be removed from the inventory? ")?;
            let result = self.api.remove_item(&name)?;
            write_messages(&mut self.output, &result.messages)?;

            if !self.confirm("Do you want to remove another item? (y/n): ")? {
                return Ok(());
            }
        }
    }

    // Only "y" leaves the report; "n" asks again.
    fn report_view(&mut self, report: Report) -> Flow<Step> {
        let table = match report {
            Report::Inventory => self.api.inventory_report(),
            Report::Sales => self.api.sales_report(),
        };
        write!(self.output, "{}", render_table(&table))?;

        loop {
            if self.command("Do you want to back to Main Menu? (y/n): ")? == "y" {
                return Ok(Step::Go(Mode::MainMenu));
            }
        }
    }

    fn store_mode(&mut self) -> Flow<Step> {
        loop {
            let mut session = self.api.start_checkout();
            tracing::debug!(transaction_id = session.transaction_id(), "checkout started");
            writeln!(
                self.output,
                "Enter \"{}\" to print the receipt.",
                DONE_SENTINEL
            )?;

            loop {
                let input = self.prompt("Item: ")?;
                if input.trim().is_empty() {
                    continue;
                }
                if is_done(&input) {
                    break;
                }

                let notice = match self.api.scan(&mut session, &input)? {
                    ScanOutcome::Added(_) => continue,
                    ScanOutcome::OutOfStock(name) => format!("{} is out-of-stock.", name),
                    ScanOutcome::NotAvailable(name) => {
                        format!("{} is not available in this store.", name)
                    }
                };
                write_message(&mut self.output, &CmdMessage::warning(notice))?;
            }

            let receipt = self.api.finish_checkout(session)?;
            write!(self.output, "{}", render_receipt(&receipt))?;
            writeln!(self.output, "Thank you!\n")?;

            if !self.confirm("Process another? (y/n) : ")? {
                return Ok(Step::Go(Mode::MainMenu));
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Flow<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Halt::EndOfInput);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Reads a menu letter or y/n answer, case-insensitively.
    fn command(&mut self, text: &str) -> Flow<String> {
        Ok(self.prompt(text)?.trim().to_lowercase())
    }

    fn confirm(&mut self, text: &str) -> Flow<bool> {
        loop {
            match self.command(text)?.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => continue,
            }
        }
    }

    /// Re-prompts until `parse` accepts the answer.
    fn prompt_valid<T>(&mut self, text: &str, parse: fn(&str) -> Result<T>) -> Flow<T> {
        loop {
            let raw = self.prompt(text)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_validation() => {
                    tracing::debug!(error = %err, "rejected input");
                    write_message(&mut self.output, &CmdMessage::error(err.to_string()))?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
