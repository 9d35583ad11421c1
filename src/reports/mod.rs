use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use matrixlotto::consts::GRID_SIDE;
use matrixlotto::draws::DrawRecord;
use matrixlotto::engine::Prediction;
use matrixlotto::filters::{FilterKind, FilterSet};
use matrixlotto::game::GameKind;
use matrixlotto::grid::Grid;
use matrixlotto::official::MatchRow;
use matrixlotto::quickpick::QuickPickOutcome;
use matrixlotto::report::PatternReport;
use matrixlotto::stats::{self, FrequencyTable, DECADE_LABELS};
use matrixlotto::storage::SavedSet;
use matrixlotto::tokens::Token;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_grid(grid: &Grid) {
    println!("\nGrid ({} of {} cells filled):", grid.filled_count(), grid.mask().visible_count());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (r, row) in grid.rows().iter().enumerate() {
        let cells: Vec<Cell> = row
            .iter()
            .enumerate()
            .map(|(c, digit)| {
                let index = r * GRID_SIDE + c;
                match digit {
                    Some(d) => Cell::new(d).add_attribute(Attribute::Bold).fg(Color::Cyan),
                    None if grid.mask().is_visible(index) => {
                        Cell::new(format!("[{}]", index)).fg(Color::DarkGrey)
                    }
                    None => Cell::new(" "),
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_filters(filters: &FilterSet) {
    let states: Vec<String> = FilterKind::iter()
        .map(|k| {
            let mark = if filters.is_enabled(k) { "x" } else { " " };
            match (k, filters.min_gap) {
                (FilterKind::LargeJump, Some(gap)) => format!("[{}] {} (gap {})", mark, k, gap),
                _ => format!("[{}] {}", mark, k),
            }
        })
        .collect();
    println!("Filters: {}", states.join("  "));
}

pub fn print_tokens(tokens: &[Token]) {
    if tokens.is_empty() {
        println!("No tokens yet.");
        return;
    }
    let list: Vec<String> = tokens
        .iter()
        .map(|t| format!("{}/{}", t.forward, t.reverse))
        .collect();
    println!("Tokens ({}): {}", tokens.len(), list.join(" "));
}

pub fn print_predictions(predictions: &[Prediction]) {
    if predictions.is_empty() {
        return;
    }
    let mut table = new_table();
    let mut header = vec![Cell::new("#").add_attribute(Attribute::Bold)];
    header.extend((1..=6).map(|i| Cell::new(format!("N{}", i))));
    header.push(Cell::new("Sum"));
    header.push(Cell::new("Even/Odd"));
    table.add_row(header);
    right_align(&mut table, 1, 7);

    for (i, p) in predictions.iter().enumerate() {
        let mut row = vec![Cell::new(i + 1).add_attribute(Attribute::Bold)];
        row.extend(
            p.numbers()
                .iter()
                .map(|&n| Cell::new(stats::format_number(n)).fg(Color::Green)),
        );
        let parity = stats::parity_split(p.numbers());
        row.push(Cell::new(stats::sum(p.numbers())));
        row.push(Cell::new(format!("{}/{}", parity.even, parity.odd)));
        table.add_row(row);
    }
    println!("\n🎯 Predictions:\n{}", table);
}

pub fn print_pattern_report(report: &PatternReport) {
    if report.is_empty() {
        println!("Pattern report is empty.");
        return;
    }

    let mut freq = new_table();
    freq.add_row(vec![
        Cell::new("Digit").add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);
    for d in &report.digit_frequency {
        freq.add_row(vec![Cell::new(d.digit), Cell::new(d.count)]);
    }
    right_align(&mut freq, 1, 1);
    println!("\n📊 Digit frequency:\n{}", freq);

    let mut pairs = new_table();
    pairs.add_row(vec![
        Cell::new("Pair").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Weight").fg(Color::Cyan),
    ]);
    for e in &report.top_pairs {
        pairs.add_row(vec![
            Cell::new(&e.token),
            Cell::new(e.count),
            Cell::new(format!("{:.1}", e.weight)).fg(Color::Cyan),
        ]);
    }
    right_align(&mut pairs, 1, 2);
    println!("\n⚖️  Top pairs:\n{}", pairs);

    let mut moves = new_table();
    moves.add_row(vec![
        Cell::new("Pos").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Pair"),
        Cell::new("Reverse"),
        Cell::new("Weight"),
    ]);
    for m in &report.movements {
        moves.add_row(vec![
            Cell::new(&m.position),
            Cell::new(m.category),
            Cell::new(&m.token),
            Cell::new(&m.reverse),
            Cell::new(format!("{:.1}", m.weight)),
        ]);
    }
    right_align(&mut moves, 4, 4);
    println!("\n🧭 Movements:\n{}", moves);
}

pub fn print_matches(predictions: &[Prediction], rows: &[MatchRow]) {
    let mut table = new_table();
    let mut header = vec![Cell::new("#").add_attribute(Attribute::Bold)];
    header.extend((1..=6).map(|i| Cell::new(format!("N{}", i))));
    header.push(Cell::new("Hits").add_attribute(Attribute::Bold));
    table.add_row(header);

    for (i, (p, row)) in predictions.iter().zip(rows).enumerate() {
        let mut cells = vec![Cell::new(i + 1)];
        for (&n, &hit) in p.numbers().iter().zip(&row.hits) {
            let cell = Cell::new(stats::format_number(n));
            cells.push(if hit {
                cell.fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                cell.fg(Color::DarkGrey)
            });
        }
        cells.push(Cell::new(row.count).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    println!("\n✅ Verification:\n{}", table);
}

pub fn print_quick_picks(game: GameKind, picks: &[QuickPickOutcome]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new(format!("{} numbers", game)),
        Cell::new("Filtered"),
    ]);
    for (i, p) in picks.iter().enumerate() {
        let numbers: Vec<String> = p.numbers.iter().map(|&n| stats::format_number(n)).collect();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(numbers.join(" ")).fg(Color::Green),
            Cell::new(if p.filtered { "yes" } else { "no (fallback)" }),
        ]);
    }
    println!("\n🎲 Quick pick:\n{}", table);
}

pub fn print_saved_sets(sets: &[SavedSet]) {
    if sets.is_empty() {
        println!("No saved bets.");
        return;
    }
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Game").add_attribute(Attribute::Bold),
        Cell::new("Numbers").add_attribute(Attribute::Bold),
    ]);
    for (i, set) in sets.iter().enumerate() {
        let numbers: Vec<String> = set.numbers.iter().map(|&n| stats::format_number(n)).collect();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(set.game),
            Cell::new(numbers.join(" ")).fg(Color::Green),
        ]);
    }
    println!("\n💾 Saved bets:\n{}", table);
}

pub fn print_draw(record: &DrawRecord) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Contest").add_attribute(Attribute::Bold),
        Cell::new(record.numero),
    ]);
    table.add_row(vec![Cell::new("Date"), Cell::new(&record.data_apuracao)]);
    table.add_row(vec![
        Cell::new("Numbers"),
        Cell::new(record.lista_dezenas.join(" ")).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Rolled over"),
        Cell::new(if record.acumulado { "yes" } else { "no" }),
    ]);
    table.add_row(vec![
        Cell::new("Next jackpot (accumulated)"),
        Cell::new(format!("R$ {:.2}", record.valor_acumulado_proximo_concurso)),
    ]);
    if let Some(v) = record.valor_estimado_proximo_concurso {
        table.add_row(vec![
            Cell::new("Next jackpot (estimated)"),
            Cell::new(format!("R$ {:.2}", v)),
        ]);
    }
    if let Some(place) = &record.nome_municipio_uf_sorteio {
        table.add_row(vec![Cell::new("Drawn in"), Cell::new(place)]);
    }
    println!("\n{}", table);

    if !record.lista_rateio_premio.is_empty() {
        let mut tiers = new_table();
        tiers.add_row(vec![
            Cell::new("Tier").add_attribute(Attribute::Bold),
            Cell::new("Winners"),
            Cell::new("Prize"),
        ]);
        for t in &record.lista_rateio_premio {
            tiers.add_row(vec![
                Cell::new(&t.descricao_faixa),
                Cell::new(t.numero_de_ganhadores),
                Cell::new(format!("R$ {:.2}", t.valor_premio)),
            ]);
        }
        right_align(&mut tiers, 1, 2);
        println!("{}", tiers);
    }
}

pub fn print_frequency(table: &FrequencyTable, contests: usize) {
    let mut out = new_table();
    out.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Hot").fg(Color::Red),
        Cell::new("Count"),
        Cell::new("Cold").fg(Color::Blue),
        Cell::new("Count"),
    ]);
    for (i, (hot, cold)) in table.hottest().iter().zip(table.coldest()).take(10).enumerate() {
        out.add_row(vec![
            Cell::new(i + 1),
            Cell::new(stats::format_number(hot.0)).fg(Color::Red),
            Cell::new(hot.1),
            Cell::new(stats::format_number(cold.0)).fg(Color::Blue),
            Cell::new(cold.1),
        ]);
    }
    println!("\n🔥 Frequency over {} contests:\n{}", contests, out);
}

pub fn print_set_stats(numbers: &[u8], drawn_before: bool) {
    let parity = stats::parity_split(numbers);
    let decades = stats::decade_distribution(numbers);
    let shown: Vec<String> = numbers.iter().map(|&n| stats::format_number(n)).collect();

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Numbers").add_attribute(Attribute::Bold),
        Cell::new(shown.join(" ")),
    ]);
    table.add_row(vec![Cell::new("Sum"), Cell::new(stats::sum(numbers))]);
    table.add_row(vec![
        Cell::new("Even/Odd"),
        Cell::new(format!("{}/{}", parity.even, parity.odd)),
    ]);
    let spread: Vec<String> = DECADE_LABELS
        .iter()
        .zip(decades)
        .map(|(label, n)| format!("{}:{}", label, n))
        .collect();
    table.add_row(vec![Cell::new("Decades"), Cell::new(spread.join("  "))]);
    table.add_row(vec![
        Cell::new("Drawn before"),
        Cell::new(if drawn_before { "yes" } else { "no" }),
    ]);
    println!("{}", table);
}
