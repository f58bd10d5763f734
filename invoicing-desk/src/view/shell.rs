//! Line-oriented front end that binds terminal input to an `InvoiceDesk`.

use super::command::{Command, HELP};
use super::table::render_items;
use crate::desk::InvoiceDesk;
use crate::services::get_metrics;
use desk_core::{DeskError, DeskResult};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

pub struct Shell<R, W> {
    desk: InvoiceDesk,
    lines: Lines<R>,
    out: W,
    dirty: Arc<AtomicBool>,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(mut desk: InvoiceDesk, input: R, out: W) -> Self {
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&dirty);
        desk.subscribe(move |_| flag.store(true, Ordering::Relaxed));

        Self {
            desk,
            lines: input.lines(),
            out,
            dirty,
        }
    }

    pub fn desk(&self) -> &InvoiceDesk {
        &self.desk
    }

    pub fn into_parts(self) -> (InvoiceDesk, W) {
        (self.desk, self.out)
    }

    /// Process commands until `quit` or end of input.
    pub async fn run(&mut self) -> DeskResult<()> {
        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(usage) => {
                    writeln!(self.out, "! {}", usage)?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            if let Err(e) = self.execute(command).await {
                tracing::debug!(error = %e, kind = e.kind(), "Command failed");
                writeln!(self.out, "! {}", e.user_message())?;
            }

            if self.dirty.swap(false, Ordering::Relaxed) {
                self.render()?;
            }
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> DeskResult<()> {
        match command {
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Show => {
                self.render()?;
                writeln!(self.out, "Invoice no: {}", self.desk.invoice_no())?;
            }
            Command::Description(v) => self.desk.form.description = v,
            Command::Power(v) => self.desk.form.power = v,
            Command::Quantity(v) => self.desk.form.quantity = v,
            Command::Price(v) => self.desk.form.price = v,
            Command::Product(v) => self.desk.pick_product(&v),
            Command::Add(fields) => {
                if let Some([description, power, quantity, price]) = fields {
                    self.desk.form.description = description;
                    self.desk.form.power = power;
                    self.desk.form.quantity = quantity;
                    self.desk.form.price = price;
                }
                self.desk.add_from_form()?;
            }
            Command::Select(index) => {
                if !self.desk.select_row(index) {
                    writeln!(self.out, "! No such row")?;
                }
            }
            Command::Remove => {
                self.desk.remove_selected()?;
            }
            Command::Clear => {
                write!(self.out, "Clear all items? [y/N] ")?;
                self.out.flush()?;
                let answer = self.lines.next_line().await?.unwrap_or_default();
                let confirmed = answer.trim().to_ascii_lowercase().starts_with('y');
                self.desk.clear_all(|| confirmed);
            }
            Command::Customer(id) => {
                self.desk.select_customer(&id).await?;
                writeln!(self.out, "Invoice no: {}", self.desk.invoice_no())?;
            }
            Command::InvoiceNo(no) => self.desk.edit_invoice_no(no),
            Command::Date(date) => self.desk.header.date = date,
            Command::Letterhead(on) => self.desk.header.print_letterhead = on,
            Command::Ntn(on) => self.desk.header.print_ntn = on,
            Command::Submit => {
                let outcome = self.desk.submit().await?;
                writeln!(self.out, "Invoice generated: {}", outcome.pdf_url)?;
                if let Some(next) = outcome.next_invoice_no {
                    writeln!(self.out, "Next invoice no: {}", next)?;
                }
            }
            Command::NewCustomer { name, address } => {
                self.desk.add_customer(&name, &address).await?;
                writeln!(self.out, "Customer saved")?;
            }
            Command::NewProduct { name, price } => {
                self.desk.add_product(&name, &price).await?;
                writeln!(self.out, "Product saved")?;
            }
            Command::Metrics => writeln!(self.out, "{}", get_metrics())?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), DeskError> {
        let table = render_items(self.desk.items(), self.desk.selected(), self.desk.total());
        write!(self.out, "{}", table)?;
        Ok(())
    }
}
