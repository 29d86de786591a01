pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// выборка из UnicodeData.txt
pub const UNICODE_DATA: &str = include_str!("./../../../data/sample/UnicodeData.txt");
/// выборка из CaseFolding.txt
pub const CASE_FOLDING: &str = include_str!("./../../../data/sample/CaseFolding.txt");

/// группа с одним замером: $input готовится один раз, $routine измеряется
#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $input: expr, $input_type: ty, $routine: expr) => {
        #[inline(never)]
        fn $test(input: &$input_type) -> usize
        {
            $routine(input)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let input: $input_type = $input;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            group.bench_with_input(
                criterion::BenchmarkId::new($name, "sample"),
                &input,
                |b, input| b.iter(|| $test(criterion::black_box(input))),
            );

            group.finish();
        }
    };
}
