use criterion::{criterion_group, criterion_main, Criterion};
use text_conversion_prepare::resolve::{Latin1, StripStrange};
use text_conversion_prepare::tables::ConversionTables;
use text_conversion_prepare::{compile, load, output, CompilerConfig};
use text_conversion_source::CharacterTable;

use group::{CASE_FOLDING, UNICODE_DATA};

mod group;

fn prepared() -> CharacterTable
{
    load(UNICODE_DATA, CASE_FOLDING, &CompilerConfig::default()).unwrap()
}

fn compiled() -> (CharacterTable, ConversionTables)
{
    compile(UNICODE_DATA, CASE_FOLDING, &CompilerConfig::default()).unwrap()
}

group!(
    loading,
    test_loading,
    "load",
    "table",
    (),
    (),
    |_: &()| prepared().len()
);

group!(
    strip_strange,
    test_strip_strange,
    "resolve",
    "strip_strange",
    prepared(),
    CharacterTable,
    |table: &CharacterTable| {
        let resolver = StripStrange::new(table);
        table.iter().filter_map(|c| resolver.resolve(c.code).ok()).map(|r| r.codes.len()).sum()
    }
);

group!(
    latin1,
    test_latin1,
    "resolve",
    "latin1",
    prepared(),
    CharacterTable,
    |table: &CharacterTable| {
        let resolver = Latin1::new(table);
        table.iter().filter_map(|c| resolver.resolve(c.code).ok()).map(|r| r.len()).sum()
    }
);

group!(
    render,
    test_render,
    "output",
    "render",
    compiled(),
    (CharacterTable, ConversionTables),
    |(table, tables): &(CharacterTable, ConversionTables)| {
        output::render(table, &tables.emitted(true), "tables.h", "bench")
            .map(|artifacts| artifacts.header.len() + artifacts.source.len())
            .unwrap_or_default()
    }
);

criterion_group!(benches, loading, strip_strange, latin1, render);
criterion_main!(benches);
