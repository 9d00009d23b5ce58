//! Whole-form validation benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use form_engine::{BooleanField, EmailField, Field, FileField, FileUpload, Form, SelectField, TextField};

fn build_form(copies: usize) -> Form {
    let mut form = Form::new("bench");
    for _ in 0..copies {
        let fields = [
            Field::new("name", TextField::new().with_min_length(3).with_value("Ada")).required(),
            Field::new("email", EmailField::new().with_value("ada@example.com")),
            Field::new("flag", BooleanField::new()),
            Field::new(
                "level",
                SelectField::new(["basic", "advanced"].map(String::from))
                    .with_default("advanced".to_string()),
            ),
            Field::new(
                "file",
                FileField::new().with_max_size(1 << 20).with_value(FileUpload::new("a.pdf", 512)),
            ),
        ];
        for field in fields {
            form.add_field(field).expect("fresh field ids are unique");
        }
    }
    form
}

fn form_validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_validate");

    for copies in [1usize, 10, 100].iter() {
        let mut form = build_form(*copies);
        group.bench_with_input(BenchmarkId::from_parameter(copies * 5), copies, |b, _| {
            b.iter(|| black_box(form.validate()))
        });
    }

    group.finish();
}

criterion_group!(benches, form_validation_benchmark);
criterion_main!(benches);
