use super::money::Amount;
use super::ports::{Beverage, BeverageBox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDrink {
    Espresso,
    Tea,
    Latte,
    Mocha,
}

impl BaseDrink {
    pub fn name(&self) -> &'static str {
        match self {
            BaseDrink::Espresso => "espresso",
            BaseDrink::Tea => "tea",
            BaseDrink::Latte => "latte",
            BaseDrink::Mocha => "mocha",
        }
    }

    pub fn price(&self) -> Amount {
        match self {
            BaseDrink::Espresso => Amount::tenge(300),
            BaseDrink::Tea => Amount::tenge(200),
            BaseDrink::Latte => Amount::tenge(350),
            BaseDrink::Mocha => Amount::tenge(400),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Additive {
    Milk,
    Sugar,
    WhippedCream,
    Caramel,
    Cinnamon,
}

impl Additive {
    pub const ALL: [Additive; 5] = [
        Additive::Milk,
        Additive::Sugar,
        Additive::WhippedCream,
        Additive::Caramel,
        Additive::Cinnamon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Additive::Milk => "milk",
            Additive::Sugar => "sugar",
            Additive::WhippedCream => "whipped cream",
            Additive::Caramel => "caramel",
            Additive::Cinnamon => "cinnamon",
        }
    }

    pub fn surcharge(&self) -> Amount {
        match self {
            Additive::Milk => Amount::tenge(50),
            Additive::Sugar => Amount::tenge(20),
            Additive::WhippedCream => Amount::tenge(70),
            Additive::Caramel => Amount::tenge(60),
            Additive::Cinnamon => Amount::tenge(40),
        }
    }
}

/// An undecorated drink straight from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainBeverage {
    drink: BaseDrink,
}

impl PlainBeverage {
    pub fn new(drink: BaseDrink) -> Self {
        Self { drink }
    }
}

impl Beverage for PlainBeverage {
    fn base(&self) -> BaseDrink {
        self.drink
    }

    fn additives(&self) -> &[Additive] {
        &[]
    }

    fn cost(&self) -> Amount {
        self.drink.price()
    }
}

/// One add-on layer around another beverage.
///
/// Each layer owns the full add-on sequence seen so far: the inner sequence
/// followed by its own additive. Cost is delegated inward and never stored.
pub struct WithAdditive {
    inner: BeverageBox,
    additive: Additive,
    additives: Vec<Additive>,
}

impl WithAdditive {
    pub fn new(inner: BeverageBox, additive: Additive) -> Self {
        let mut additives = inner.additives().to_vec();
        additives.push(additive);
        Self {
            inner,
            additive,
            additives,
        }
    }
}

impl Beverage for WithAdditive {
    fn base(&self) -> BaseDrink {
        self.inner.base()
    }

    fn additives(&self) -> &[Additive] {
        &self.additives
    }

    fn cost(&self) -> Amount {
        self.inner.cost() + self.additive.surcharge()
    }
}

/// Wraps `beverage` in one more add-on layer.
pub fn decorate(beverage: BeverageBox, additive: Additive) -> BeverageBox {
    Box::new(WithAdditive::new(beverage, additive))
}
