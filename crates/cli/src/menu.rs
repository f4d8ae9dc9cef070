use core::str::FromStr;

use stockledger_core::DomainError;

/// Main menu entries, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    ViewProducts,
    RecordSale,
    RestockProduct,
    LowStockReport,
    SortProducts,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddProduct,
        MenuChoice::ViewProducts,
        MenuChoice::RecordSale,
        MenuChoice::RestockProduct,
        MenuChoice::LowStockReport,
        MenuChoice::SortProducts,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::AddProduct => 1,
            MenuChoice::ViewProducts => 2,
            MenuChoice::RecordSale => 3,
            MenuChoice::RestockProduct => 4,
            MenuChoice::LowStockReport => 5,
            MenuChoice::SortProducts => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddProduct => "Add Product",
            MenuChoice::ViewProducts => "View Products",
            MenuChoice::RecordSale => "Record Sale",
            MenuChoice::RestockProduct => "Restock Product",
            MenuChoice::LowStockReport => "Generate Low-Stock Report",
            MenuChoice::SortProducts => "Sort Products",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let number = raw
            .parse::<u32>()
            .map_err(|_| DomainError::invalid_menu_choice(raw))?;
        MenuChoice::ALL
            .into_iter()
            .find(|c| c.number() == number)
            .ok_or_else(|| DomainError::invalid_menu_choice(raw))
    }
}
