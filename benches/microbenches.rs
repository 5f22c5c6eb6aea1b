use criterion::{self, criterion_group, criterion_main, Criterion};
use nbfx::name::QualifiedName;
use nbfx::options::SerializerOptions;
use nbfx::reader::Parser;
use nbfx::tree::{Attribute, Element};
use nbfx::value::Value;
use nbfx::varint;
use nbfx::writer::Writer;

/// Builds a moderately deep, moderately wide document resembling a SOAP
/// envelope: a handful of attributes per element, mixed value types, and
/// enough children to make `sort_members` do real work.
fn sample_document() -> Element {
    let mut envelope = Element::new(QualifiedName::new("s", "Envelope"));
    envelope.attributes.push(Attribute::new(
        QualifiedName::new("s", "xmlns"),
        Value::String("http://schemas.xmlsoap.org/soap/envelope/".to_owned()),
    ));

    let mut body = Element::new(QualifiedName::new("s", "Body"));
    for i in 0..200 {
        let name = match i % 4 {
            0 => "zebra",
            1 => "apple",
            2 => "mango",
            _ => "kiwi",
        };
        let mut item = Element::new(QualifiedName::local(name));
        item.attributes
            .push(Attribute::new(QualifiedName::local("id"), Value::Int64(i as i64)));
        item.attributes.push(Attribute::new(
            QualifiedName::local("active"),
            Value::Boolean(i % 2 == 0),
        ));
        item.value = Value::String(format!("payload-{}", i));
        body.children.push(item);
    }
    envelope.children.push(body);
    envelope
}

fn parse_document(c: &mut Criterion) {
    let bytes = {
        let mut buf = Vec::new();
        Writer::default().write(&sample_document(), &mut buf).unwrap();
        buf
    };

    let mut group = c.benchmark_group("parse");
    group.bench_function("envelope", |b| {
        b.iter(|| {
            let doc = Parser::default().parse(criterion::black_box(bytes.clone())).unwrap();
            criterion::black_box(doc);
        })
    });
    group.finish();
}

fn write_document(c: &mut Criterion) {
    let doc = sample_document();

    let mut group = c.benchmark_group("write");
    group.bench_function("sort_members = false", |b| {
        let writer = Writer::new(SerializerOptions::new().sort_members(false));
        b.iter(|| {
            let mut buf = Vec::new();
            writer.write(criterion::black_box(&doc), &mut buf).unwrap();
            criterion::black_box(buf);
        })
    });

    group.bench_function("sort_members = true", |b| {
        let writer = Writer::new(SerializerOptions::new().sort_members(true));
        b.iter(|| {
            let mut buf = Vec::new();
            writer.write(criterion::black_box(&doc), &mut buf).unwrap();
            criterion::black_box(buf);
        })
    });
    group.finish();
}

fn round_trip(c: &mut Criterion) {
    let doc = sample_document();

    c.bench_function("round_trip/envelope", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            Writer::default().write(criterion::black_box(&doc), &mut buf).unwrap();
            let parsed = Parser::default().parse(buf).unwrap();
            criterion::black_box(parsed);
        })
    });
}

fn varint_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");

    group.bench_function("encode_u31/small", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            varint::encode_u31(criterion::black_box(127), &mut buf);
            criterion::black_box(buf);
        })
    });

    group.bench_function("encode_u31/large", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            varint::encode_u31(criterion::black_box((1 << 31) - 1), &mut buf);
            criterion::black_box(buf);
        })
    });

    group.bench_function("decode_u31/large", |b| {
        let mut buf = Vec::new();
        varint::encode_u31((1 << 31) - 1, &mut buf);
        b.iter(|| {
            criterion::black_box(varint::decode_u31(criterion::black_box(&buf)).unwrap());
        })
    });
    group.finish();
}

criterion_group!(benches, parse_document, write_document, round_trip, varint_codec);
criterion_main!(benches);
