// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::hint::black_box;

use criterion::{Criterion, criterion_group};
use ledgerkit_model::{
    TokenRegistry, default_registry, parse_currency, pounds,
    types::fixed::parse_minor_units,
};

pub fn bench_parse_trailing_code(c: &mut Criterion) {
    c.bench_function("parse_currency_trailing_code", |b| {
        b.iter(|| parse_currency(black_box("1234.56 GBP")));
    });
}

pub fn bench_parse_leading_symbol(c: &mut Criterion) {
    // Warm the default registry outside the measured loop
    let _ = default_registry();
    c.bench_function("parse_currency_leading_symbol", |b| {
        b.iter(|| parse_currency(black_box("US$1234.56")));
    });
}

pub fn bench_parse_explicit_registry(c: &mut Criterion) {
    let registry = TokenRegistry::with_defaults();
    c.bench_function("registry_parse_currency", |b| {
        b.iter(|| registry.parse_currency(black_box("₿0.00012345")));
    });
}

pub fn bench_parse_minor_units(c: &mut Criterion) {
    c.bench_function("parse_minor_units", |b| {
        b.iter(|| parse_minor_units(black_box("-98765.4321"), black_box(8)));
    });
}

pub fn bench_checked_add(c: &mut Criterion) {
    let a = pounds(10);
    let b_amount = pounds(5);
    c.bench_function("amount_checked_add", |b| {
        b.iter(|| black_box(&a).checked_add(black_box(&b_amount)));
    });
}

pub fn bench_display(c: &mut Criterion) {
    let amount = pounds(-1_234_567);
    c.bench_function("amount_to_string", |b| {
        b.iter(|| black_box(&amount).to_string());
    });
}

criterion_group!(
    benches,
    bench_parse_trailing_code,
    bench_parse_leading_symbol,
    bench_parse_explicit_registry,
    bench_parse_minor_units,
    bench_checked_add,
    bench_display,
);
criterion::criterion_main!(benches);
