// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use scraper::Html;

use tgstat_tools::{export::build_csv, specs::channels};

/// Listing page with `n` cards, alternating public and invite links.
fn synthetic_page(n: usize) -> String {
    let mut html = String::from("<html><body><div class=\"lst\">");
    for i in 0..n {
        let href = if i % 2 == 0 {
            format!("https://tgstat.ru/channel/@chan{i}")
        } else {
            format!("https://tgstat.ru/channel/AAAAA{i:06}/stat")
        };
        html.push_str(&format!(
            "<div class=\"card peer-item-row\"><a href=\"{href}\">\
             <div class=\"font-16\">Channel \"{i}\"</div></a>\
             <h4>{} {:03}</h4><h4>{}</h4><h4>{}.{}</h4></div>",
            i + 1, i % 1000, i * 7, i % 50, i % 10
        ));
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(500);

    c.bench_function("scan_html_500", |b| {
        b.iter(|| {
            let recs = channels::scan_html(black_box(&page)).unwrap_or_default();
            black_box(recs.len())
        })
    });

    let doc = Html::parse_document(&page);
    c.bench_function("scan_document_500", |b| {
        b.iter(|| {
            let recs = channels::scan_document(black_box(&doc)).unwrap_or_default();
            black_box(recs.len())
        })
    });

    let recs = channels::scan_document(&doc).unwrap_or_default();
    c.bench_function("build_csv_500", |b| {
        b.iter(|| black_box(build_csv(black_box(&recs))).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
