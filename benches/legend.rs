use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_legend::builder::from_graph_data;
use graph_legend::render::render_legend_html;
use serde_json::{Value, json};
use std::hint::black_box;

const CATEGORIES: [&str; 6] = ["service", "database", "queue", "cache", "gateway", "worker"];
const STYLES: [&str; 3] = ["solid", "dashed", "dotted"];

fn synthetic_graph(nodes: usize, edges: usize) -> Value {
    let nodes: Vec<Value> = (0..nodes)
        .map(|i| {
            json!({
                "id": format!("n{i}"),
                "type": CATEGORIES[i % CATEGORIES.len()],
                "color": format!("#{:06x}", (i * 40503) & 0xffffff),
                "size": 6 + (i % 9),
            })
        })
        .collect();
    let edges: Vec<Value> = (0..edges)
        .map(|i| {
            json!({
                "source": format!("n{i}"),
                "target": format!("n{}", i + 1),
                "metadata": {
                    "type": format!("rel-{}", i % 4),
                    "style": STYLES[i % STYLES.len()],
                    "weight": 1 + (i % 5),
                }
            })
        })
        .collect();
    json!({
        "nodes": nodes,
        "edges": edges,
        "metadata": {
            "node_legend": [{"label": "External", "color": "#ff8800", "shape": "triangle"}],
        }
    })
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for size in [10usize, 100, 1000, 10_000] {
        let data = synthetic_graph(size, size * 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| from_graph_data(black_box(data), true))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let data = synthetic_graph(1000, 2000);
    let legend = match from_graph_data(&data, true) {
        Ok(legend) => legend,
        Err(err) => panic!("synthetic graph rejected: {err}"),
    };
    c.bench_function("render_html", |b| {
        b.iter(|| render_legend_html(black_box(&legend), false))
    });
}

criterion_group!(benches, bench_detect, bench_render);
criterion_main!(benches);
