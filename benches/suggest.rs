// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stemma-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stemma and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stemma::suggest::{SuggestionEngine, SuggestionRequest};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `suggest.browse`, `suggest.typed`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small`, `medium`, `large_long_names`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_suggest(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("suggest.browse");

        for case in [
            fixtures::catalog::Case::Small,
            fixtures::catalog::Case::Medium,
            fixtures::catalog::Case::LargeLongNames,
        ] {
            let catalog = fixtures::catalog::fixture(case);
            let entities = (catalog.collections().len()
                + catalog.link_types().len()
                + catalog.views().len()) as u64;
            group.throughput(Throughput::Elements(entities));
            group.bench_function(case.id(), |b| {
                let engine = SuggestionEngine::new(&catalog);
                b.iter(|| {
                    let request = SuggestionRequest::new(black_box(""), &[]);
                    black_box(engine.suggest(&request).len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("suggest.typed");

        for case in [
            fixtures::catalog::Case::Small,
            fixtures::catalog::Case::Medium,
            fixtures::catalog::Case::LargeLongNames,
        ] {
            let catalog = fixtures::catalog::fixture(case);
            let entities = (catalog.collections().len()
                + catalog.link_types().len()
                + catalog.views().len()) as u64;
            group.throughput(Throughput::Elements(entities));
            group.bench_function(case.id(), |b| {
                let engine = SuggestionEngine::new(&catalog);
                b.iter(|| {
                    let request = SuggestionRequest::new(black_box("task"), &[]);
                    black_box(engine.suggest(&request).len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_suggest
}
criterion_main!(benches);
