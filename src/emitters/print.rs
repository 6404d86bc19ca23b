use std::io::Write;

use super::{escape_xml, DeckEmitter};
use crate::{
    error::Result,
    models::slide::{Align, Frame, ImageBox, SlideLayout, TextBox, CANVAS_HEIGHT, CANVAS_WIDTH},
};

/// Canvas units are printed as inches.
const UNIT: &str = "in";

/// Font sizes are given in points.
const STYLE: &str = "\
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:Arial,Helvetica,sans-serif}
.slide{position:relative;overflow:hidden;page-break-after:always;break-after:page}
.text{position:absolute;display:flex;align-items:center;white-space:pre-wrap}
.image{position:absolute;display:flex;align-items:center;justify-content:center}
.image img{max-width:100%;max-height:100%;object-fit:contain}
.rounded img{border-radius:50%}
";

/// Print ready HTML page, one page per slide.
pub struct PrintEmitter;

fn frame_style(frame: &Frame) -> String {
    format!(
        "left:{x}{u};top:{y}{u};width:{w}{u};height:{h}{u}",
        x = frame.x,
        y = frame.y,
        w = frame.w,
        h = frame.h,
        u = UNIT
    )
}

fn write_text(out: &mut dyn Write, text: &TextBox) -> Result<()> {
    let justify = match text.align {
        Align::Left => "flex-start",
        Align::Center => "center",
        Align::Right => "flex-end",
    };
    writeln!(
        out,
        r#"<div class="text" style="{};color:#{};font-size:{}pt;justify-content:{};text-align:{}">{}</div>"#,
        frame_style(&text.frame),
        escape_xml(&text.color),
        text.font_size,
        justify,
        match text.align {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        },
        escape_xml(&text.text)
    )?;
    Ok(())
}

fn write_image(out: &mut dyn Write, image: &ImageBox) -> Result<()> {
    let class = if image.rounded { "image rounded" } else { "image" };
    writeln!(
        out,
        r#"<div class="{}" style="{}"><img src="{}" alt=""></div>"#,
        class,
        frame_style(&image.frame),
        escape_xml(&image.path)
    )?;
    Ok(())
}

impl DeckEmitter for PrintEmitter {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn emit(&self, slides: &[SlideLayout], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, r#"<html><head><meta charset="utf-8"><title>Deck</title>"#)?;
        writeln!(
            out,
            "<style>@page{{size:{w}{u} {h}{u};margin:0}}\n.slide{{width:{w}{u};height:{h}{u}}}\n{}</style>",
            STYLE,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT,
            u = UNIT
        )?;
        writeln!(out, "</head><body>")?;

        for slide in slides {
            writeln!(
                out,
                r#"<section class="slide" style="background:#{}">"#,
                escape_xml(slide.background())
            )?;
            if let Some(image) = slide.image() {
                write_image(out, image)?;
            }
            for text in slide.texts() {
                write_text(out, text)?;
            }
            writeln!(out, "</section>")?;
        }

        writeln!(out, "</body></html>")?;
        Ok(())
    }
}
