use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::sensor::error::ExportError;
use crate::sensor::Recording;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub trace: RGBColor,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 300,
            background: RGBColor(10, 10, 15),
            trace: CYAN,
        }
    }
}
/// Line plot of one recording. Draws no text, so no font backend is needed.
pub fn render_recording_png(
    recording: &Recording,
    style: &PlotStyle,
) -> Result<Vec<u8>, ExportError> {
    let samples = recording.samples();
    if samples.is_empty() {
        return Err(ExportError::Plot("recording has no samples".into()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        // symmetric y range, never narrower than the burst envelope
        let bound = recording.peak().max(0.25) * 1.1;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(0f64..samples.len() as f64, -bound..bound)?;
        chart.draw_series(LineSeries::new(
            [(0.0, 0.0), (samples.len() as f64, 0.0)],
            &WHITE.mix(0.2),
        ))?;
        let series = samples.iter().enumerate().map(|(i, v)| (i as f64, *v));
        chart.draw_series(LineSeries::new(series, &style.trace))?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ExportError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
