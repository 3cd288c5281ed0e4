use crate::entities::StripSolution;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws the packed strip, scaled by `scale` pixels per unit.
///
/// The canvas measures `width * scale` by `height * scale`, items rest on the bottom edge.
pub fn layout_to_svg(
    solution: &StripSolution,
    scale: f32,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let strip = &solution.strip;

    let canvas_width = strip.width as f32 * scale;
    let canvas_height = strip.height as f32 * scale;

    let stroke_width = f32::max(scale * 0.02, 0.5) * theme.stroke_width_multiplier;
    let font_size = f32::max(scale * 0.5, 6.0);
    let margin = 2.0 * font_size;

    let label = {
        //print some information above the left top of the strip
        let label_content = format!(
            "width: {} | height: {} | density: {:.3}% | {}",
            strip.width,
            strip.height,
            solution.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0_f32)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let strip_group = Group::new()
        .set("id", "strip")
        .add(svg_util::rect(
            0.0,
            0.0,
            canvas_width,
            canvas_height,
            &[
                ("fill", &*theme.strip_fill.to_string()),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "strip, width: {}, height: {}",
            strip.width, strip.height
        )));

    let mut items_group = Group::new().set("id", "items");
    for pi in &solution.placed_items {
        let item = &pi.item;
        let fill = match options.highlight_rotated && item.rotated {
            true => theme.rotated_item_fill,
            false => theme.item_fill,
        };
        let stroke = svg_util::change_brightness(fill, 0.5);

        let x = pi.x as f32 * scale;
        let y = (strip.height - pi.y_max()) as f32 * scale;
        let w = item.width as f32 * scale;
        let h = item.height as f32 * scale;

        let mut item_group = Group::new()
            .set("id", format!("item_{}", item.index))
            .add(svg_util::rect(
                x,
                y,
                w,
                h,
                &[
                    ("fill", &*fill.to_string()),
                    ("stroke", &*stroke.to_string()),
                    ("stroke-width", &*format!("{stroke_width}")),
                ],
            ))
            .add(Title::new(format!(
                "item, index: {}, x: {}, y: {}, {}x{}, rotated: {}",
                item.index, pi.x, pi.y, item.width, item.height, item.rotated
            )));

        if options.draw_labels {
            //label at the origin (bottom left corner) of the item
            item_group = item_group.add(
                Text::new(format!("{}", item.index))
                    .set("x", x + 0.1 * font_size)
                    .set("y", y + h - 0.2 * font_size)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("fill", theme.label_color.to_string()),
            );
        }
        items_group = items_group.add(item_group);
    }

    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -2.0 * margin,
                canvas_width + 2.0 * margin,
                canvas_height + 3.0 * margin,
            ),
        )
        .set("width", canvas_width + 2.0 * margin)
        .set("height", canvas_height + 3.0 * margin)
        .add(strip_group)
        .add(items_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RawItem;
    use crate::pack::{StripPacker, normalize};

    fn solution() -> StripSolution {
        let raw_items = [(2, 4), (5, 2), (1, 9)]
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| RawItem::new(w, h, i).unwrap());
        StripPacker::new(normalize(raw_items)).solve()
    }

    #[test]
    fn every_item_is_drawn() {
        let document = layout_to_svg(&solution(), 10.0, SvgDrawOptions::default(), "test");
        let svg = document.to_string();

        for index in 0..3 {
            assert!(svg.contains(&format!("id=\"item_{index}\"")));
        }
        assert!(svg.contains("width: 5 | height: 9"));
    }

    #[test]
    fn labels_can_be_disabled() {
        let options = SvgDrawOptions {
            draw_labels: false,
            ..SvgDrawOptions::default()
        };
        let svg = layout_to_svg(&solution(), 10.0, options, "").to_string();
        // only the title label remains
        assert_eq!(svg.matches("<text").count(), 1);
    }

    #[test]
    fn items_rest_on_the_bottom() {
        let svg = layout_to_svg(&solution(), 10.0, SvgDrawOptions::default(), "").to_string();
        // the 2x4 item (index 0) is placed last, at x = 3, and is 5 units shorter than the strip
        let (_, item_0) = svg.split_once("id=\"item_0\"").unwrap();
        for attr in ["x=\"30\"", "y=\"50\"", "width=\"20\"", "height=\"40\""] {
            assert!(item_0.contains(attr), "missing {attr}");
        }
    }
}
