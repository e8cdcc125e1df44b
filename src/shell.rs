use crate::category::{UnknownCategory, VehicleCategory};
use crate::error::ParkingError;
use crate::ledger::ledger::ReservationLedger;
use crate::reservation::{ReservationRow, VehicleId};
use chrono::NaiveDateTime;
use std::str::FromStr;
use std::sync::Arc;
use tabled::settings::{Alignment, Style};
use thiserror::Error;

pub const COMMANDS: [&str; 6] = ["park", "leave", "slots", "ls", "help", "exit"];

pub const HELP: &str = "
Available Commands:
  park <vehicle> <type>  - Reserve a slot for <vehicle>, type is one of CAR, BIKE, TRUCK
  leave <vehicle>        - Release the slot of <vehicle> and print the bill
  slots                  - Show available slots
  ls                     - List parked vehicles
  help / ?               - Show this help menu
  exit / quit            - Exit the system
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Park {
        vehicle_id: VehicleId,
        category: VehicleCategory,
    },
    Leave {
        vehicle_id: VehicleId,
    },
    Slots,
    List,
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Usage: park <vehicle> <car|bike|truck>")]
    ParkUsage,
    #[error("Usage: leave <vehicle>")]
    LeaveUsage,
    #[error(transparent)]
    Category(#[from] UnknownCategory),
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["park", vehicle, category] => Ok(Command::Park {
                vehicle_id: Arc::from(*vehicle),
                category: category.parse()?,
            }),
            ["park", ..] => Err(CommandError::ParkUsage),
            ["leave", vehicle] => Ok(Command::Leave {
                vehicle_id: Arc::from(*vehicle),
            }),
            ["leave", ..] => Err(CommandError::LeaveUsage),
            ["slots"] => Ok(Command::Slots),
            ["ls"] => Ok(Command::List),
            ["help"] | ["?"] => Ok(Command::Help),
            ["exit"] | ["quit"] => Ok(Command::Exit),
            _ => Err(CommandError::Unknown(parts.first().unwrap_or(&"").to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Table { rendered: String, rows: usize },
    Help,
    Exit,
}

pub fn execute(
    ledger: &mut ReservationLedger,
    command: Command,
    now: NaiveDateTime,
) -> Result<Reply, ParkingError> {
    let reply = match command {
        Command::Park {
            vehicle_id,
            category,
        } => {
            let reservation = ledger.open_reservation(vehicle_id, category, now)?;
            Reply::Text(format!(
                "Vehicle added and slot reserved. Booking {} for {} ({}).",
                reservation.id, reservation.vehicle_id, reservation.category
            ))
        }
        Command::Leave { vehicle_id } => {
            let (amount, reservation) = ledger.close_reservation(&vehicle_id, now)?;
            Reply::Text(format!(
                "Slot released. Booking {} parked {} ({} min). Bill amount: ${:.2}",
                reservation.id,
                reservation.duration(),
                reservation.duration().0,
                amount
            ))
        }
        Command::Slots => Reply::Text(format!(
            "Available slots: {} of {}",
            ledger.available_slots(),
            ledger.capacity()
        )),
        Command::List => {
            let rows: Vec<ReservationRow> = ledger.active().map(ReservationRow::from).collect();
            if rows.is_empty() {
                Reply::Text("No vehicles parked.".to_string())
            } else {
                let count = rows.len();
                let mut table = tabled::Table::new(rows);
                table.with(Style::rounded());
                table.with(Alignment::left());
                Reply::Table {
                    rendered: table.to_string(),
                    rows: count,
                }
            }
        }
        Command::Help => Reply::Help,
        Command::Exit => Reply::Exit,
    };
    Ok(reply)
}
