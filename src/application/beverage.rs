use super::menu::parse_choice;
use crate::domain::beverage::{Additive, BaseDrink, PlainBeverage, decorate};
use crate::domain::ports::BeverageBox;
use crate::error::Result;
use crate::interfaces::console::Console;
use tracing::{debug, warn};

const DRINK_MENU: [&str; 4] = ["1 - Espresso", "2 - Tea", "3 - Latte", "4 - Mocha"];

const ADD_ON_MENU: [&str; 6] = [
    "1 - Milk",
    "2 - Sugar",
    "3 - Whipped cream",
    "4 - Caramel",
    "5 - Cinnamon",
    "0 - Done",
];

/// What a single answer in the add-on loop asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOnChoice {
    Add(Additive),
    Done,
    Invalid,
}

impl AddOnChoice {
    pub fn from_choice(choice: Option<i64>) -> Self {
        match choice {
            Some(0) => AddOnChoice::Done,
            Some(1) => AddOnChoice::Add(Additive::Milk),
            Some(2) => AddOnChoice::Add(Additive::Sugar),
            Some(3) => AddOnChoice::Add(Additive::WhippedCream),
            Some(4) => AddOnChoice::Add(Additive::Caramel),
            Some(5) => AddOnChoice::Add(Additive::Cinnamon),
            _ => AddOnChoice::Invalid,
        }
    }
}

/// Maps a drink menu choice to its base drink; anything unknown is espresso.
pub fn select_drink(choice: Option<i64>) -> BaseDrink {
    match choice {
        Some(1) => BaseDrink::Espresso,
        Some(2) => BaseDrink::Tea,
        Some(3) => BaseDrink::Latte,
        Some(4) => BaseDrink::Mocha,
        other => {
            warn!(choice = ?other, "unknown drink choice, falling back to espresso");
            BaseDrink::Espresso
        }
    }
}

/// Runs the ordering dialogue and prints the order summary.
///
/// Add-ons are applied in the order they are chosen until `0` or the end of
/// input. Invalid answers leave the drink untouched and ask again.
pub fn run_beverage<C: Console + ?Sized>(console: &mut C) -> Result<BeverageBox> {
    console.write_line("Choose a drink:")?;
    for entry in DRINK_MENU {
        console.write_line(entry)?;
    }
    let choice = console
        .prompt("Your choice: ")?
        .map_or(Some(1), |input| parse_choice(&input));

    let drink = select_drink(choice);
    debug!(drink = drink.name(), "base drink selected");
    let mut beverage: BeverageBox = Box::new(PlainBeverage::new(drink));

    loop {
        console.write_line("")?;
        console.write_line("Add anything else?")?;
        for entry in ADD_ON_MENU {
            console.write_line(entry)?;
        }
        let choice = console
            .prompt("Your choice: ")?
            .map_or(Some(0), |input| parse_choice(&input));

        match AddOnChoice::from_choice(choice) {
            AddOnChoice::Add(additive) => {
                beverage = decorate(beverage, additive);
                debug!(
                    additive = additive.label(),
                    cost = %beverage.cost(),
                    "additive applied"
                );
            }
            AddOnChoice::Done => break,
            AddOnChoice::Invalid => console.write_line("Invalid choice.")?,
        }
    }

    console.write_line("")?;
    console.write_line(&format!("Your order: {}", beverage.description()))?;
    console.write_line(&format!("Total cost: {} tg", beverage.cost()))?;

    Ok(beverage)
}
