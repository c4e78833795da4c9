// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resilience_api::parse_record_id;
use resilience_model::{CatalogKind, CatalogSet};
use resilience_server::{build_router, AppState};

fn bench_record_lookup(c: &mut Criterion) {
    let catalogs = CatalogSet::builtin().expect("builtin catalogs");

    c.bench_function("catalog.precedents.lookup_last", |b| {
        b.iter(|| {
            let id = parse_record_id(CatalogKind::Precedents, black_box("4")).expect("id");
            black_box(catalogs.get(CatalogKind::Precedents).find(id))
        });
    });

    c.bench_function("catalog.tasks.lookup_miss", |b| {
        b.iter(|| {
            let id = parse_record_id(CatalogKind::Tasks, black_box("999")).expect("id");
            black_box(catalogs.get(CatalogKind::Tasks).find(id))
        });
    });

    c.bench_function("http.router.build", |b| {
        b.iter(|| black_box(build_router(AppState::new(catalogs.clone()))));
    });
}

criterion_group!(benches, bench_record_lookup);
criterion_main!(benches);
