//! Line-oriented front end that binds terminal input to an `InventoryDesk`.

use super::command::{Command, HELP};
use crate::models::LensOption;
use crate::services::get_metrics;
use crate::stock::InventoryDesk;
use desk_core::DeskResult;
use std::fmt::Write as _;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Render the lens picker, placeholder first.
pub fn render_options(options: &[LensOption]) -> String {
    let mut out = String::new();
    for option in options {
        if option.is_placeholder() {
            let _ = writeln!(out, "  -- {}", option.label);
        } else {
            let _ = writeln!(out, "  [{}] {}", option.value, option.label);
        }
    }
    out
}

pub struct Shell<R, W> {
    desk: InventoryDesk,
    lines: Lines<R>,
    out: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(desk: InventoryDesk, input: R, out: W) -> Self {
        Self {
            desk,
            lines: input.lines(),
            out,
        }
    }

    pub fn into_parts(self) -> (InventoryDesk, W) {
        (self.desk, self.out)
    }

    /// Load the lens picker, then process commands until `quit` or end of input.
    pub async fn run(&mut self) -> DeskResult<()> {
        if let Err(e) = self.show_lenses().await {
            writeln!(self.out, "! {}", e.user_message())?;
        }

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
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> DeskResult<()> {
        match command {
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Lenses => self.show_lenses().await?,
            Command::Register(name) => {
                self.desk.register_lens(&name).await?;
                writeln!(self.out, "Lens registered successfully.")?;
                self.print_options()?;
            }
            Command::StockIn(form) => {
                let request = self.desk.stock_in(form).await?;
                writeln!(
                    self.out,
                    "Stock updated successfully. ({} x lens {} on {})",
                    request.quantity, request.lens_id, request.purchase_date
                )?;
            }
            Command::Metrics => writeln!(self.out, "{}", get_metrics())?,
            Command::Quit => {}
        }
        Ok(())
    }

    async fn show_lenses(&mut self) -> DeskResult<()> {
        self.desk.load_lens_options().await?;
        self.print_options()
    }

    fn print_options(&mut self) -> DeskResult<()> {
        write!(self.out, "{}", render_options(self.desk.lens_options()))?;
        Ok(())
    }
}
