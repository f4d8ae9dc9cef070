//! Console rendering of menus, tables and outcomes.

use std::io::{self, Write};

use stockledger_core::DomainError;
use stockledger_inventory::{LowStockReport, Product, SortCriterion};

use crate::menu::MenuChoice;

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========== INVENTORY MANAGEMENT SYSTEM ==========")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    writeln!(out, "===============================================")
}

pub fn write_sort_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Sort by:")?;
    for criterion in SortCriterion::ALL {
        writeln!(out, "{}. {}", criterion.menu_number(), criterion.label())?;
    }
    Ok(())
}

pub fn write_inventory<'a>(
    out: &mut impl Write,
    products: impl IntoIterator<Item = &'a Product>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Current Inventory ---")?;
    for p in products {
        writeln!(
            out,
            "ID: {} | {} | Price: {} | Qty: {} | Supplier: {}",
            p.product_id(),
            p.name(),
            p.price(),
            p.quantity(),
            p.supplier()
        )?;
    }
    Ok(())
}

pub fn write_low_stock_report(
    out: &mut impl Write,
    report: &LowStockReport,
    threshold: u32,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Low Stock Products (Qty < {threshold}) ---")?;
    match report {
        LowStockReport::FullyStocked => {
            writeln!(out, "All products are sufficiently stocked.")
        }
        LowStockReport::Items(lines) => {
            for line in lines {
                writeln!(out, "ID: {} | {} | Qty: {}", line.product_id, line.name, line.quantity)?;
            }
            Ok(())
        }
    }
}

pub fn write_sorted(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Sorted Products ---")?;
    for p in products {
        writeln!(
            out,
            "ID: {} | {} | Qty: {} | Price: {} | Sales: {}",
            p.product_id(),
            p.name(),
            p.quantity(),
            p.price(),
            p.sales_count()
        )?;
    }
    Ok(())
}

/// Operator-facing message for a rejected operation.
pub fn describe_error(err: &DomainError) -> String {
    match err {
        DomainError::NotFound(_) => "Product not found!".to_string(),
        DomainError::InsufficientStock { .. } => "Not enough stock!".to_string(),
        DomainError::InvalidMenuChoice(_) => "Invalid choice.".to_string(),
        DomainError::Validation(msg) | DomainError::InvalidId(msg) => format!("Invalid input: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_core::ProductId;
    use stockledger_inventory::{LowStockLine, Price};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn menu_lists_all_seven_entries() {
        let text = render(|out| write_menu(out));
        assert!(text.contains("1. Add Product\n"));
        assert!(text.contains("5. Generate Low-Stock Report\n"));
        assert!(text.contains("7. Exit\n"));
    }

    #[test]
    fn inventory_row_format() {
        let product = Product::new(ProductId::new(1), "Widget", Price::new(9.99).unwrap(), 3, "Acme");
        let text = render(|out| write_inventory(out, [&product]));
        assert!(text.contains("ID: 1 | Widget | Price: 9.99 | Qty: 3 | Supplier: Acme\n"));
    }

    #[test]
    fn report_renders_fully_stocked_message() {
        let text = render(|out| write_low_stock_report(out, &LowStockReport::FullyStocked, 5));
        assert!(text.contains("--- Low Stock Products (Qty < 5) ---"));
        assert!(text.contains("All products are sufficiently stocked."));
    }

    #[test]
    fn report_renders_rows() {
        let report = LowStockReport::Items(vec![LowStockLine {
            product_id: ProductId::new(4),
            name: "Nut".to_string(),
            quantity: 2,
        }]);
        let text = render(|out| write_low_stock_report(out, &report, 5));
        assert!(text.contains("ID: 4 | Nut | Qty: 2\n"));
    }

    #[test]
    fn errors_map_to_console_messages() {
        assert_eq!(describe_error(&DomainError::not_found(ProductId::new(1))), "Product not found!");
        assert_eq!(
            describe_error(&DomainError::insufficient_stock(ProductId::new(1), 5, 1)),
            "Not enough stock!"
        );
        assert_eq!(describe_error(&DomainError::invalid_menu_choice("9")), "Invalid choice.");
    }
}
