//! Image loading and GPU upload for paper faces.
//!
//! Images come in through `HtmlImageElement` + `decode()`, get rasterized to
//! RGBA via a scratch 2D canvas, and are uploaded with `Queue::write_texture`.
//! The back face is mirrored horizontally at upload time so text reads
//! correctly when the paper is turned over.

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct PaperTextures {
    pub front: wgpu::Texture,
    pub front_view: wgpu::TextureView,
    pub back: wgpu::Texture,
    pub back_view: wgpu::TextureView,
    /// Width over height of the front image, drives the plane fit.
    pub aspect_ratio: f32,
}

impl PaperTextures {
    /// Free the GPU memory now instead of waiting for garbage collection.
    pub fn destroy(&self) {
        self.front.destroy();
        self.back.destroy();
    }
}

/// Fetch and upload both faces of a paper. A missing or identical back
/// source reuses the front image (still mirrored).
pub async fn load_pair(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    front_src: &str,
    back_src: Option<&str>,
) -> anyhow::Result<PaperTextures> {
    let front_img = load_image(front_src).await?;
    let back_img = match back_src {
        Some(src) if src != front_src => Some(load_image(src).await?),
        _ => None,
    };

    let (front, front_view, w, h) = upload_image(device, queue, &front_img, false, "paper_front")?;
    let back_source = back_img.as_ref().unwrap_or(&front_img);
    let (back, back_view, _, _) = upload_image(device, queue, back_source, true, "paper_back")?;

    Ok(PaperTextures {
        front,
        front_view,
        back,
        back_view,
        aspect_ratio: w as f32 / h.max(1) as f32,
    })
}

async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{e:?}"))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(src);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow!("image decode failed for {src}: {e:?}"))?;
    Ok(img)
}

fn upload_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    img: &web::HtmlImageElement,
    mirror: bool,
    label: &str,
) -> anyhow::Result<(wgpu::Texture, wgpu::TextureView, u32, u32)> {
    let width = img.natural_width().max(1);
    let height = img.natural_height().max(1);

    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;
    let scratch: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("scratch element is not a canvas"))?;
    scratch.set_width(width);
    scratch.set_height(height);
    let ctx: web::CanvasRenderingContext2d = scratch
        .get_context("2d")
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|_| anyhow!("unexpected 2d context type"))?;
    if mirror {
        ctx.translate(width as f64, 0.0).map_err(|e| anyhow!("{e:?}"))?;
        ctx.scale(-1.0, 1.0).map_err(|e| anyhow!("{e:?}"))?;
    }
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow!("{e:?}"))?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow!("{e:?}"))?
        .data();

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        // Quality policy: no mipmaps, the paper fills most of the viewport
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    Ok((texture, view, width, height))
}
