use std::sync::Arc;

use arrow_array::{ArrayRef, FixedSizeListArray, Float64Array, ListArray};
use arrow_buffer::OffsetBuffer;
use arrow_schema::{DataType, Field};
use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_render::accessor::Accessors;
use geoarrow_render::algorithm::{
    encode_picking_color, expand_values, invert_offsets, resolve_offsets,
};
use geoarrow_render::array::{GeometryArray, MultiPolygonArray};
use geoarrow_render::render::prepare_chunk;

fn list(offsets: OffsetBuffer<i32>, values: ArrayRef) -> ArrayRef {
    let field = Arc::new(Field::new("item", values.data_type().clone(), false));
    Arc::new(ListArray::new(field, offsets, values, None))
}

// 10_000 multipolygons of 2 polygons, each a single 5-vertex ring
fn create_data() -> MultiPolygonArray {
    let num_rings = 20_000;
    let coords: Vec<f64> = (0..num_rings * 5 * 2).map(|v| v as f64).collect();
    let coords: ArrayRef = Arc::new(FixedSizeListArray::new(
        Arc::new(Field::new("xy", DataType::Float64, false)),
        2,
        Arc::new(Float64Array::from(coords)),
        None,
    ));
    let rings = list(
        OffsetBuffer::from_lengths(std::iter::repeat(5).take(num_rings)),
        coords,
    );
    let polygons = list(
        OffsetBuffer::from_lengths(std::iter::repeat(1).take(num_rings)),
        rings,
    );
    let geoms = list(
        OffsetBuffer::from_lengths(std::iter::repeat(2).take(num_rings / 2)),
        polygons,
    );
    MultiPolygonArray::try_from(geoms.as_ref()).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let feature_offsets = data.geom_to_coord_offsets().unwrap();
    let widths: Vec<f32> = (0..data.len()).map(|v| v as f32).collect();

    c.bench_function("resolve MultiPolygonArray offsets", |b| {
        b.iter(|| {
            let _ = resolve_offsets(&[
                data.geom_offsets(),
                data.polygon_offsets(),
                data.ring_offsets(),
            ]);
        })
    });

    c.bench_function("expand per-feature f32", |b| {
        b.iter(|| {
            let _ = expand_values(&widths, 1, &feature_offsets);
        })
    });

    c.bench_function("invert MultiPolygonArray offsets", |b| {
        b.iter(|| {
            let _ = invert_offsets(data.geom_offsets());
        })
    });

    let geometry = GeometryArray::MultiPolygon(data.clone());
    let accessors = Accessors::new();
    c.bench_function("prepare MultiPolygonArray chunk", |b| {
        b.iter(|| {
            let _ = prepare_chunk(0, &geometry, 0, &accessors, encode_picking_color);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
