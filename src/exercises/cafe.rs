//! Cafe stock valuation

use crate::console::display::format_thousands;
use crate::console::Terminal;
use crate::errors::Result;

/// One menu item with its stock level and unit price
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub name: String,
    pub stock: u32,
    pub price: f64,
}

impl StockItem {
    pub fn new(name: &str, stock: u32, price: f64) -> Self {
        Self {
            name: name.to_string(),
            stock,
            price,
        }
    }

    pub fn value(&self) -> f64 {
        f64::from(self.stock) * self.price
    }
}

/// Menu in display order
#[derive(Debug, Clone, PartialEq)]
pub struct StockTable {
    items: Vec<StockItem>,
}

impl StockTable {
    /// The cafe's fixed menu
    pub fn standard() -> Self {
        Self {
            items: vec![
                StockItem::new("Coffee", 50, 2.0),
                StockItem::new("Tea", 100, 1.5),
                StockItem::new("Sandwich", 20, 5.0),
                StockItem::new("Cake", 10, 3.5),
            ],
        }
    }

    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&StockItem> {
        self.items.iter().find(|item| item.name.eq_ignore_ascii_case(name))
    }

    pub fn total_worth(&self) -> f64 {
        self.items.iter().map(StockItem::value).sum()
    }
}

pub fn run(term: &mut Terminal) -> Result<()> {
    let table = StockTable::standard();
    let currency = term.currency().to_string();

    for item in table.items() {
        term.say(format!(
            "  {:<10} {:>4} x {}{:.2} = {}{}",
            item.name,
            item.stock,
            currency,
            item.price,
            currency,
            format_thousands(item.value(), 2)
        ))?;
    }
    term.say(format!(
        "The total stock worth in the cafe is: {}{:.2}",
        currency,
        table.total_worth()
    ))
}
