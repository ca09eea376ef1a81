use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonevalue::{PhoneNumberFormat, PhoneNumberUpdate, PhoneNumberUtil};

use phonenumber::{
    self as rlp,
    country::Id::{self, AR, DE, GB, IT, US},
    Mode,
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", "US", US),
        ("+44 20 8765 4321", "GB", GB),
        ("020 8765 4321", "GB", GB),
        ("011 15-1234-5678", "AR", AR),
        ("02 12345678", "IT", IT),
        ("030 123456", "DE", DE),
    ]
}

fn convert_to_rlp_numbers(numbers: &[TestEntity]) -> Vec<rlp::PhoneNumber> {
    numbers
        .iter()
        .map(|s| rlp::parse(Some(s.2), s.0).unwrap())
        .collect()
}

fn convert_to_phonevalue_numbers(
    phone_util: &PhoneNumberUtil,
    numbers: &[TestEntity],
) -> Vec<phonevalue::PhoneNumber> {
    numbers
        .iter()
        .map(|s| phone_util.parse(s.0, Some(s.1)).unwrap())
        .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let phone_util = PhoneNumberUtil::bundled();
    let numbers = setup_numbers();
    let rlp_numbers = convert_to_rlp_numbers(&numbers);
    let numbers = convert_to_phonevalue_numbers(&phone_util, &numbers);

    let mut group = c.benchmark_group("Formatting Comparison");

    let mut test = |format_a: PhoneNumberFormat, format_b: Mode| {
        // Formats are memoized per instance, so this measures the cached
        // lookup after the first iteration.
        group.bench_function(format!("phonevalue: format({:?})", format_a), |b| {
            b.iter(|| {
                for number in &numbers {
                    black_box(number).format(black_box(format_a));
                }
            })
        });

        group.bench_function(format!("phonevalue: fresh format({:?})", format_a), |b| {
            b.iter(|| {
                for number in &numbers {
                    black_box(number)
                        .derive(PhoneNumberUpdate::new())
                        .format(black_box(format_a))
                        .len();
                }
            })
        });

        group.bench_function(format!("rust-phonenumber: format({:?})", format_b), |b| {
            b.iter(|| {
                for number in &rlp_numbers {
                    rlp::format(black_box(number)).mode(format_b).to_string();
                }
            })
        });

        for (number_a, number_b) in rlp_numbers.iter().zip(numbers.iter()) {
            assert_eq!(
                rlp::format(number_a).mode(format_b).to_string(),
                number_b.format(format_a)
            );
        }
    };

    test(PhoneNumberFormat::E164, Mode::E164);
    test(PhoneNumberFormat::International, Mode::International);
    test(PhoneNumberFormat::National, Mode::National);
    test(PhoneNumberFormat::RFC3966, Mode::Rfc3966);
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
