use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use bitmask::prelude::*;

bitmask::flags! {
	enum Contact {
		Phone = 0b0000001,
		Name = 0b0000010,
		Gender = 0b0000100,
		Email = 0b0001000,
		Birthday = 0b0100000,
		Location = 0b1000000,
	}
}

fn wide_schema() -> Arc<Schema> {
	Schema::from_names((0..MAX_FLAGS).map(|idx| format!("flag_{}", idx))).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let schema = Contact::schema();
	let bitmask = Bitmask::from_names(&schema, [Contact::Phone, Contact::Name, Contact::Email]).unwrap();

	/* CONSTRUCTION BENCHMARKS */
	let mut construct_group = c.benchmark_group("Construct");
	construct_group.throughput(Throughput::Elements(1));

	construct_group.bench_function("Bitmask::from_bits(---)", |b| {
		b.iter(|| Bitmask::from_bits(&schema, black_box(11)))
	});

	construct_group.bench_function("Bitmask::new([&str; N])", |b| {
		b.iter(|| Bitmask::new(&schema, black_box(["Phone", "Name", "Email"])).unwrap())
	});

	construct_group.bench_function("Bitmask::from_names(Contact)", |b| {
		b.iter(|| Bitmask::from_names(&schema, black_box([Contact::Phone, Contact::Name, Contact::Email])).unwrap())
	});

	construct_group.finish();

	/* ACCESS BENCHMARKS */
	let mut access_group = c.benchmark_group("Access");
	access_group.throughput(Throughput::Elements(1));

	access_group.bench_function("Bitmask::get(---)", |b| {
		b.iter(|| bitmask.get(black_box(Contact::Email)).unwrap())
	});

	access_group.bench_function("Bitmask::set(---)", |b| {
		b.iter(|| bitmask.set(black_box("Gender"), true).unwrap())
	});

	access_group.bench_function("Bitmask::set_array(---)", |b| {
		b.iter(|| bitmask.set_array(black_box(["Phone", "Location", "Fax"])))
	});

	access_group.bench_function("Bitmask::to_h(---)", |b| b.iter(|| bitmask.to_h()));

	access_group.finish();

	/* WIDE SCHEMA BENCHMARKS */
	let wide = wide_schema();
	let wide_mask = Bitmask::from_bits(&wide, 0xAAAA_AAAA_AAAA_AAAA);

	let mut wide_group = c.benchmark_group("Wide");
	wide_group.throughput(Throughput::Elements(MAX_FLAGS as u64));

	wide_group.bench_function("Bitmask::to_a(64)", |b| b.iter(|| wide_mask.to_a()));
	wide_group.bench_function("Bitmask::each(64)", |b| {
		b.iter(|| {
			let mut count = 0;
			wide_mask.each(|_, toggle| count += toggle as usize);
			black_box(count)
		})
	});

	wide_group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
