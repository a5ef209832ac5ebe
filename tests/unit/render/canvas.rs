use super::*;

fn size(width: u32, height: u32) -> ImageSize {
    ImageSize::new(width, height).unwrap()
}

#[test]
fn silence_paints_one_row_below_center() {
    // Mean-zero amplitude maps to floor(32768 / 65535 * 99) = 49.
    let mut canvas = WaveformCanvas::new(size(10, 100));
    for column in 0..10 {
        canvas.paint_column(column, ColumnEnvelope { min: 0.0, max: 0.0 });
    }
    let image = canvas.into_image();
    for column in 0..10 {
        assert_eq!(image.get_pixel(column, 49).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(column, 48).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(column, 50).0, [255, 255, 255, 255]);
    }
}

#[test]
fn full_scale_envelope_spans_every_row() {
    let mut canvas = WaveformCanvas::new(size(1, 64));
    canvas.paint_column(0, ColumnEnvelope {
        min: SAMPLE_MIN,
        max: 32767.0,
    });
    let image = canvas.into_image();
    for row in 0..64 {
        assert_eq!(image.get_pixel(0, row).0, [0, 0, 0, 0], "row {row}");
    }
}

#[test]
fn unpainted_columns_stay_background() {
    let mut canvas = WaveformCanvas::new(size(3, 8));
    canvas.paint_column(1, ColumnEnvelope {
        min: -10_000.0,
        max: 10_000.0,
    });
    let image = canvas.into_image();
    for row in 0..8 {
        assert_eq!(image.get_pixel(0, row).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(2, row).0, [255, 255, 255, 255]);
    }
}

#[test]
fn unsupported_extension_is_an_output_error() {
    let canvas = WaveformCanvas::new(size(2, 2));
    let err = canvas
        .write(std::path::Path::new("target/out.notaformat"))
        .unwrap_err();
    assert!(matches!(err, WavepeekError::OutputWrite(_)));
}
