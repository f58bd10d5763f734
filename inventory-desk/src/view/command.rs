//! Line commands accepted by the inventory desk shell.

use crate::models::StockInForm;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Lenses,
    Register(String),
    StockIn(StockInForm),
    Metrics,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "lenses" | "list" => Command::Lenses,
            "register" => Command::Register(rest.to_string()),
            "stock" => Command::StockIn(parse_stock_in(rest)?),
            "metrics" => Command::Metrics,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}' (try 'help')", other)),
        };
        Ok(command)
    }
}

fn parse_stock_in(rest: &str) -> Result<StockInForm, String> {
    let mut fields = rest.split('|').map(|f| f.trim().to_string());
    let mut next = || fields.next().unwrap_or_default();

    let lens_id = next();
    let power = next();
    let quantity = next();
    let supplier = next();
    let date = next();

    let purchase_date = if date.is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| "purchase date must be YYYY-MM-DD".to_string())?,
        )
    };

    Ok(StockInForm {
        lens_id,
        power,
        quantity,
        supplier,
        purchase_date,
    })
}

pub const HELP: &str = "\
lenses                                                   reload registered lenses
register <name>                                          register a new lens
stock <lens id> | <power> | <qty> | <supplier> [| <date>]  record stock received
metrics | quit";
