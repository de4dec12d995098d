//! Normalization performance benchmarks.
//!
//! Measures markup stripping, element extraction and full record assembly.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lapidary::normalize::{extract_elements, strip_markup};
use lapidary::{Catalog, Cell, SheetTable};

const FORMULAS: &[&str] = &[
    "CaMg(CO<sub>3</sub>)<sub>2</sub>",
    "Fe<sup>2+</sup><sub>3</sub>Al<sub>2</sub>(SiO<sub>4</sub>)<sub>3</sub>",
    "Na<sub>2</sub>B<sub>4</sub>O<sub>7</sub>&nbsp;·&nbsp;10H<sub>2</sub>O",
    "K(Mg,Fe)<sub>3</sub>AlSi<sub>3</sub>O<sub>10</sub>(OH)<sub>2</sub><br>",
];

/// Generate a synthetic data sheet with the production headers.
fn generate_data_sheet(rows: usize) -> SheetTable {
    let headers = ["col-ID", "Название", "Класс", "Формула", "Месторождение", "Страна", "Год открытия", "Стоимость"];
    let rows = (0..rows)
        .map(|row| {
            vec![
                Cell::Text(format!("M-{:06}", row)),
                Cell::Text(format!("Минерал {}", row)),
                Cell::Text(format!("Класс {}", row % 12)),
                Cell::from(FORMULAS[row % FORMULAS.len()]),
                Cell::Text(format!("Месторождение {}", row % 50)),
                Cell::from(["RUS", "ITA", "GBR", "ZZZ"][row % 4]),
                Cell::Number(1750.0 + (row % 250) as f64),
                if row % 3 == 0 { Cell::Empty } else { Cell::Number(row as f64 * 1.5) },
            ]
        })
        .collect();
    SheetTable::new("data", headers.iter().map(|h| h.to_string()).collect(), rows)
}

fn nations_sheet() -> SheetTable {
    let rows = [("RUS", "Россия"), ("ITA", "Италия"), ("GBR", "Англия")]
        .into_iter()
        .map(|(c, n)| vec![Cell::from(c), Cell::from(n)])
        .collect();
    SheetTable::new("nations", vec!["Alpha3".to_string(), "Наименование".to_string()], rows)
}

fn bench_strip_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_markup");
    for (i, formula) in FORMULAS.iter().enumerate() {
        group.throughput(Throughput::Bytes(formula.len() as u64));
        group.bench_with_input(BenchmarkId::new("formula", i), formula, |b, formula| {
            b.iter(|| strip_markup(black_box(Some(*formula))))
        });
    }
    group.finish();
}

fn bench_extract_elements(c: &mut Criterion) {
    let texts: Vec<String> = FORMULAS.iter().map(|f| strip_markup(Some(*f))).collect();
    c.bench_function("extract_elements", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(extract_elements(black_box(text)));
            }
        })
    });
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let nations = nations_sheet();
    let catalog = Catalog::new();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_data_sheet(*rows);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| catalog.build_from_tables(black_box(data), &nations).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strip_markup, bench_extract_elements, bench_assemble);
criterion_main!(benches);
