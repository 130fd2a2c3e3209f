//! Sample rows for the demonstration screens. In production these arrive
//! through the query layer.

use contracts::shared::grid::{GridColumn, GridRow};

pub fn product_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("code", "Code").width(110),
        GridColumn::new("name", "Product"),
        GridColumn::new("factory", "Factory").width(160),
        GridColumn::new("unit", "Unit").width(70),
        GridColumn::new("stock", "Stock").width(90),
    ]
}

pub fn products() -> Vec<GridRow> {
    [
        ("P-1001", "Hex bolt M8x40", "Plant 1", "pcs", 12_400),
        ("P-1002", "Hex bolt M10x50", "Plant 1", "pcs", 8_150),
        ("P-1003", "Hex nut M8", "Plant 2", "pcs", 30_000),
        ("P-1004", "Flat washer 8", "Plant 2", "pcs", 41_200),
        ("P-2001", "Bracket L-60", "Plant 1", "pcs", 920),
        ("P-2002", "Bracket U-80", "Plant 3", "pcs", 310),
        ("P-3001", "Steel shaft 20x300", "Plant 3", "pcs", 75),
        ("P-3002", "Steel shaft 25x400", "Plant 3", "pcs", 40),
        ("P-4001", "Housing cover A", "Plant 2", "pcs", 1_280),
        ("P-4002", "Housing cover B", "Plant 2", "pcs", 0),
    ]
    .into_iter()
    .map(|(code, name, factory, unit, stock)| {
        GridRow::new(code)
            .with("code", code)
            .with("name", name)
            .with("factory", factory)
            .with("unit", unit)
            .with("stock", stock)
    })
    .collect()
}

pub fn material_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("code", "Code").width(110),
        GridColumn::new("name", "Material"),
        GridColumn::new("grade", "Grade").width(100),
        GridColumn::new("unit", "Unit").width(70),
        GridColumn::new("on_hand", "On hand").width(100),
    ]
}

pub fn materials() -> Vec<GridRow> {
    [
        ("M-01", "Carbon steel wire rod", "C45", "kg", 18_500.0),
        ("M-02", "Alloy steel bar", "42CrMo4", "kg", 6_200.5),
        ("M-03", "Steel sheet 2mm", "DC01", "m2", 940.0),
        ("M-04", "Zinc plating solution", "ZN-7", "l", 310.0),
        ("M-05", "Aluminium ingot", "AlSi10Mg", "kg", 2_750.0),
    ]
    .into_iter()
    .map(|(code, name, grade, unit, on_hand)| {
        GridRow::new(code)
            .with("code", code)
            .with("name", name)
            .with("grade", grade)
            .with("unit", unit)
            .with("on_hand", on_hand)
    })
    .collect()
}

pub fn work_order_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("order_no", "Order").width(110),
        GridColumn::new("product", "Product"),
        GridColumn::new("qty", "Qty").width(80),
        GridColumn::new("due", "Due").width(110),
        GridColumn::new("status", "Status").width(110),
    ]
}

pub fn work_orders() -> Vec<GridRow> {
    [
        ("WO-501", "Hex bolt M8x40", 5_000, "2026-10-20", "released"),
        ("WO-502", "Bracket L-60", 400, "2026-10-21", "in progress"),
        ("WO-503", "Steel shaft 20x300", 60, "2026-10-24", "planned"),
        ("WO-504", "Housing cover B", 250, "2026-10-25", "in progress"),
        ("WO-505", "Hex nut M8", 12_000, "2026-10-28", "planned"),
    ]
    .into_iter()
    .map(|(order_no, product, qty, due, status)| {
        GridRow::new(order_no)
            .with("order_no", order_no)
            .with("product", product)
            .with("qty", qty)
            .with("due", due)
            .with("status", status)
    })
    .collect()
}

pub fn result_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("order_no", "Order").width(110),
        GridColumn::new("shift", "Shift").width(80),
        GridColumn::new("good_qty", "Good").width(90),
        GridColumn::new("defect_qty", "Defects").width(90),
        GridColumn::new("recorded_at", "Recorded"),
    ]
}

pub fn production_results() -> Vec<GridRow> {
    [
        ("R-1", "WO-501", "A", 1_620, 12, "2026-10-15 14:00"),
        ("R-2", "WO-501", "B", 1_540, 31, "2026-10-15 22:00"),
        ("R-3", "WO-502", "A", 180, 2, "2026-10-16 14:00"),
        ("R-4", "WO-504", "A", 90, 9, "2026-10-16 14:00"),
        ("R-5", "WO-504", "C", 75, 4, "2026-10-17 06:00"),
    ]
    .into_iter()
    .map(|(id, order_no, shift, good, defects, at)| {
        GridRow::new(id)
            .with("order_no", order_no)
            .with("shift", shift)
            .with("good_qty", good)
            .with("defect_qty", defects)
            .with("recorded_at", at)
    })
    .collect()
}

pub fn defect_columns() -> Vec<GridColumn> {
    vec![
        GridColumn::new("order_no", "Order").width(110),
        GridColumn::new("kind", "Defect"),
        GridColumn::new("qty", "Qty").width(80),
        GridColumn::new("found_at", "Found").width(150),
        GridColumn::new("note", "Note"),
    ]
}

pub fn defects() -> Vec<GridRow> {
    [
        ("D-1", "WO-501", "thread damage", 9, "2026-10-15 13:10", ""),
        ("D-2", "WO-501", "surface scratch", 34, "2026-10-15 21:40", "line B die worn"),
        ("D-3", "WO-502", "dimension out of tolerance", 2, "2026-10-16 11:05", ""),
        ("D-4", "WO-504", "porosity", 13, "2026-10-17 05:30", "casting batch 7"),
    ]
    .into_iter()
    .map(|(id, order_no, kind, qty, found_at, note)| {
        GridRow::new(id)
            .with("order_no", order_no)
            .with("kind", kind)
            .with("qty", qty)
            .with("found_at", found_at)
            .with("note", note)
    })
    .collect()
}
