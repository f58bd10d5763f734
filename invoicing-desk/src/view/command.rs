//! Line commands accepted by the invoice desk shell.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Description(String),
    Power(String),
    Quantity(String),
    Price(String),
    Product(String),
    /// `add` alone uses the current inputs; `add a | b | c | d` fills them first.
    Add(Option<[String; 4]>),
    Select(usize),
    Remove,
    Clear,
    Customer(String),
    InvoiceNo(String),
    Date(String),
    Letterhead(bool),
    Ntn(bool),
    Submit,
    NewCustomer { name: String, address: String },
    NewProduct { name: String, price: String },
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
            "show" | "list" => Command::Show,
            "desc" => Command::Description(rest.to_string()),
            "power" => Command::Power(rest.to_string()),
            "qty" => Command::Quantity(rest.to_string()),
            "price" => Command::Price(rest.to_string()),
            "product" => Command::Product(rest.to_string()),
            "add" if rest.is_empty() => Command::Add(None),
            "add" => {
                let fields = split_fields(rest);
                match <[String; 4]>::try_from(fields) {
                    Ok(fields) => Command::Add(Some(fields)),
                    Err(_) => return Err("usage: add <desc> | <power> | <qty> | <price>".into()),
                }
            }
            "select" => {
                let row: usize = rest
                    .parse()
                    .map_err(|_| "usage: select <row number>".to_string())?;
                if row == 0 {
                    return Err("rows are numbered from 1".into());
                }
                Command::Select(row - 1)
            }
            "remove" => Command::Remove,
            "clear" => Command::Clear,
            "customer" => Command::Customer(rest.to_string()),
            "invoice" => Command::InvoiceNo(rest.to_string()),
            "date" => Command::Date(rest.to_string()),
            "letterhead" => Command::Letterhead(parse_switch(rest)?),
            "ntn" => Command::Ntn(parse_switch(rest)?),
            "submit" => Command::Submit,
            "new-customer" => {
                let mut fields = split_fields(rest).into_iter();
                Command::NewCustomer {
                    name: fields.next().unwrap_or_default(),
                    address: fields.next().unwrap_or_default(),
                }
            }
            "new-product" => {
                let mut fields = split_fields(rest).into_iter();
                Command::NewProduct {
                    name: fields.next().unwrap_or_default(),
                    price: fields.next().unwrap_or_default(),
                }
            }
            "metrics" => Command::Metrics,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}' (try 'help')", other)),
        };
        Ok(command)
    }
}

fn split_fields(rest: &str) -> Vec<String> {
    rest.split('|').map(|f| f.trim().to_string()).collect()
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err("expected on or off".into()),
    }
}

pub const HELP: &str = "\
desc <text> | power <text> | qty <n> | price <n>   set item inputs
product <description>|<price>                     fill inputs from a product
add [<desc> | <power> | <qty> | <price>]          add a line item
select <row> | remove | clear                     edit the table
customer <id> | invoice <no> | date <yyyy-mm-dd>  invoice header
letterhead on|off | ntn on|off                    print options
submit                                            generate the PDF
new-customer <name> | <address>                   register a customer
new-product <name> | <price>                      register a product
show | metrics | quit";
