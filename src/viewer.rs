//! Native window showing a rendered chart bitmap. Blocks until closed.

use anyhow::{Result, anyhow};
use eframe::egui;

/// Open a window titled `title` displaying a packed RGB8 image.
pub fn show_rgb(title: &str, width: u32, height: u32, rgb: Vec<u8>) -> Result<()> {
    let image = egui::ColorImage::from_rgb([width as usize, height as usize], &rgb);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([400.0, 300.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartWindow::new(image)))),
    )
    .map_err(|e| anyhow!("chart window: {e}"))
}

struct ChartWindow {
    image: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl ChartWindow {
    fn new(image: egui::ColorImage) -> Self {
        Self {
            image,
            texture: None,
        }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let image = &self.image;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("chart", image.clone(), egui::TextureOptions::LINEAR)
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .shrink_to_fit(),
                );
            });
        });
    }
}
