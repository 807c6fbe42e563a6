//! Benchmark for audience evaluation on the request path
//!
//! Target: a realistic audience should evaluate in well under 1µs

use audience_conditions::condition::{clear_cache, intern};
use audience_conditions::{AttributeValue, Attributes, Audience, Condition, MatchType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Create a realistic audience: a few OR groups of leaves under an AND
fn create_test_audience() -> Audience {
    let browsers = Condition::or(
        ["chrome", "firefox", "safari", "edge"]
            .into_iter()
            .map(|b| Condition::exact("browser", b)),
    );
    let geo = Condition::or([
        Condition::exact("country", "NZ"),
        Condition::exact("country", "AU"),
        Condition::attribute("region", MatchType::Regex, r"^apac-\w+$"),
    ]);
    let engagement = Condition::and([
        Condition::attribute("sessions", MatchType::Ge, 3),
        Condition::attribute("age", MatchType::Gt, 17),
        Condition::not(Condition::exists("opted_out")),
        Condition::attribute("email", MatchType::Substring, "@example.com"),
    ]);

    Audience::new("1001", "engaged apac users", Condition::and([browsers, geo, engagement]))
}

fn create_attributes(count: usize) -> Vec<Attributes> {
    (0..count)
        .map(|i| {
            let mut attrs = Attributes::new();
            let browser = ["chrome", "firefox", "opera"][i % 3];
            attrs.insert("browser".to_string(), browser.into());
            attrs.insert("region".to_string(), format!("apac-{}", i % 5).into());
            attrs.insert("sessions".to_string(), AttributeValue::from(i as i64 % 10));
            attrs.insert("age".to_string(), AttributeValue::from(15 + (i as i64 % 30)));
            if i % 4 != 0 {
                attrs.insert("email".to_string(), format!("user{}@example.com", i).into());
            }
            attrs
        })
        .collect()
}

fn benchmark_evaluation(c: &mut Criterion) {
    let audience = create_test_audience();
    let users = create_attributes(64);

    c.bench_function("audience_evaluate", |b| {
        let mut i = 0;
        b.iter(|| {
            let attrs = &users[i % users.len()];
            i += 1;
            black_box(audience.evaluate(black_box(attrs)))
        })
    });

    c.bench_function("audience_evaluate_empty_attributes", |b| {
        let empty = Attributes::new();
        b.iter(|| black_box(audience.evaluate(black_box(&empty))))
    });
}

fn benchmark_regex_leaf(c: &mut Criterion) {
    let rule = Condition::attribute("version", MatchType::Regex, r"^2\.\d+\.\d+$");
    let mut attrs = Attributes::new();
    attrs.insert("version".to_string(), "2.14.1".into());

    // same leaf over and over: must stay on the shared compiled regex
    c.bench_function("regex_leaf_repeated", |b| {
        b.iter(|| black_box(rule.evaluate(black_box(&attrs))))
    });
}

fn benchmark_interning(c: &mut Criterion) {
    let audience = create_test_audience();

    c.bench_function("intern_cold", |b| {
        b.iter(|| {
            clear_cache();
            black_box(intern(audience.conditions.clone()))
        })
    });

    c.bench_function("intern_cached", |b| {
        clear_cache();
        intern(audience.conditions.clone());
        b.iter(|| black_box(intern(black_box(audience.conditions.clone()))))
    });
}

criterion_group!(
    benches,
    benchmark_evaluation,
    benchmark_regex_leaf,
    benchmark_interning
);
criterion_main!(benches);
