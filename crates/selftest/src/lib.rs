//! Smoke-test scenarios for the entity crates.
//!
//! Each scenario builds an entity from scratch, drives it through a short
//! script and checks the outcome. The binary runs them all and logs the
//! results; the integration tests run them under `cargo test`.

use anyhow::{Context, ensure};

use reservoir_books::Book;
use reservoir_core::{DomainError, DomainResult};
use reservoir_handsets::Handset;
use reservoir_vehicles::Vehicle;

/// A named, self-contained check.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run: fn() -> anyhow::Result<()>,
}

/// Result of running one scenario.
#[derive(Debug)]
pub struct Outcome {
    pub name: &'static str,
    pub result: anyhow::Result<()>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// All scenarios, in a stable order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "vehicle.refuel_then_drive",
            run: vehicle_refuel_then_drive,
        },
        Scenario {
            name: "vehicle.drive_on_empty_tank",
            run: vehicle_drive_on_empty_tank,
        },
        Scenario {
            name: "handset.charge_when_full",
            run: handset_charge_when_full,
        },
        Scenario {
            name: "handset.make_call",
            run: handset_make_call,
        },
        Scenario {
            name: "book.read_then_bookmark",
            run: book_read_then_bookmark,
        },
        Scenario {
            name: "book.numeric_title",
            run: book_numeric_title,
        },
    ]
}

/// Run every scenario and log each outcome.
pub fn run_all() -> Vec<Outcome> {
    scenarios()
        .into_iter()
        .map(|scenario| {
            let result = (scenario.run)();
            match &result {
                Ok(()) => tracing::info!(scenario = scenario.name, "passed"),
                Err(err) => tracing::error!(scenario = scenario.name, error = %err, "failed"),
            }
            Outcome {
                name: scenario.name,
                result,
            }
        })
        .collect()
}

fn expect_value_error<T: core::fmt::Debug>(result: DomainResult<T>) -> anyhow::Result<DomainError> {
    match result {
        Err(err @ DomainError::Value(_)) => Ok(err),
        other => anyhow::bail!("expected a value error, got {other:?}"),
    }
}

fn vehicle_refuel_then_drive() -> anyhow::Result<()> {
    let mut car = Vehicle::new("Toyota", "Corolla", 50.0)?;
    car.refuel(10.0).context("refuel")?;
    ensure!(car.fuel_level() == 10.0, "fuel level {} after refuel", car.fuel_level());
    car.drive(50.0).context("drive")?;
    ensure!(car.fuel_level() == 5.0, "fuel level {} after drive", car.fuel_level());
    Ok(())
}

fn vehicle_drive_on_empty_tank() -> anyhow::Result<()> {
    let mut car = Vehicle::new("Toyota", "Corolla", 50.0)?;
    expect_value_error(car.drive(1.0))?;
    ensure!(car.fuel_level() == 0.0, "failed drive changed the fuel level");
    Ok(())
}

fn handset_charge_when_full() -> anyhow::Result<()> {
    let mut phone = Handset::new("Apple", "iPhone 13", 4000)?;
    phone.charge(500).context("charge")?;
    ensure!(
        phone.battery_level() == 4000,
        "battery level {} after charge",
        phone.battery_level()
    );
    Ok(())
}

fn handset_make_call() -> anyhow::Result<()> {
    let mut phone = Handset::new("Apple", "iPhone 13", 4000)?;
    phone.make_call(10).context("make_call")?;
    ensure!(
        phone.battery_level() == 3900,
        "battery level {} after call",
        phone.battery_level()
    );
    Ok(())
}

fn book_read_then_bookmark() -> anyhow::Result<()> {
    let mut book = Book::new("Война и мир", "Лев Толстой", 1225)?;
    book.read_pages(100).context("read_pages")?;
    let page = book.bookmark_page();
    ensure!(page == 100, "bookmark at {page}");
    Ok(())
}

fn book_numeric_title() -> anyhow::Result<()> {
    match Book::from_args(123, "Лев Толстой", 1225) {
        Err(DomainError::Type(_)) => Ok(()),
        other => anyhow::bail!("expected a type error, got {other:?}"),
    }
}
