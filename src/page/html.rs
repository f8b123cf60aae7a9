//! HTML for a composed page.
//!
//! Section chrome is engine markup; every merchant or catalog value passes
//! through the same escaping and URL/CSS filters as template output.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    composition::settings::{HeroSettings, NewsletterSettings, SectionStyle},
    config::engine::EngineConfig,
    content::model::{Collection, DisplayItem, Product, Slide, Video},
    dispatch::dispatcher::RenderableSection,
    layout::responsive::LayoutPlan,
    page::compositor::ComposedPage,
    template::html::{HtmlWriter, css_declarations, is_safe_url},
};

pub(crate) fn render_page_html(page: &ComposedPage<'_>, config: &EngineConfig) -> String {
    let mut w = HtmlWriter::new(config.breakpoints);
    w.open("main", &[("class", "vt-page")]);
    for (index, section) in page.sections.iter().enumerate() {
        write_section(&mut w, index, section, config);
    }
    w.close("main");
    w.finish()
}

fn css(entries: &[(&str, Value)]) -> String {
    let map: BTreeMap<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    css_declarations(&map)
}

fn style_of<'s>(section: &'s RenderableSection<'_>) -> &'s SectionStyle {
    match section {
        RenderableSection::Hero { settings, .. } => &settings.style,
        RenderableSection::Products { settings, .. }
        | RenderableSection::Collections { settings, .. } => &settings.style,
        RenderableSection::Videos { settings, .. } => &settings.style,
        RenderableSection::Newsletter { settings, .. } => &settings.style,
        RenderableSection::CustomCode { style, .. } => style,
    }
}

fn write_section(
    w: &mut HtmlWriter,
    index: usize,
    section: &RenderableSection<'_>,
    config: &EngineConfig,
) {
    let scope = format!("vt-s{index}");
    let class = format!("vt-section vt-{} {scope}", section.kind().as_str());
    let style = style_of(section);
    let chrome = css(&[
        ("background", Value::String(style.background_color.clone())),
        ("color", Value::String(style.text_color.clone())),
        ("paddingTop", style.padding_top.into()),
        ("paddingBottom", style.padding_bottom.into()),
    ]);
    w.open(
        "section",
        &[
            ("class", &class),
            ("data-section-id", section.id()),
            ("style", &chrome),
        ],
    );

    // The hero and newsletter place their title inside their own layout.
    if !matches!(
        section,
        RenderableSection::Hero { .. } | RenderableSection::Newsletter { .. }
    ) {
        write_header(w, style);
    }

    match section {
        RenderableSection::Hero {
            settings,
            slides,
            rotation_interval_ms,
            ..
        } => write_hero(w, settings, slides, *rotation_interval_ms),
        RenderableSection::Products { items, plan, .. }
        | RenderableSection::Collections { items, plan, .. }
        | RenderableSection::Videos { items, plan, .. } => {
            write_items(w, &scope, items, plan, config)
        }
        RenderableSection::Newsletter { settings, .. } => write_newsletter(w, settings),
        RenderableSection::CustomCode { tree, .. } => w.ui(tree),
    }
    w.close("section");
}

fn write_header(w: &mut HtmlWriter, style: &SectionStyle) {
    if style.title.is_none() && style.subtitle.is_none() {
        return;
    }
    let header_css = css(&[
        ("textAlign", Value::String(style.text_align.as_str().to_string())),
    ]);
    w.open("header", &[("class", "vt-section-header"), ("style", &header_css)]);
    if let Some(t) = &style.title {
        let title_css = css(&[("fontSize", style.title_size.into())]);
        w.open("h2", &[("style", &title_css)]);
        w.text(t);
        w.close("h2");
    }
    if let Some(s) = &style.subtitle {
        w.open("p", &[]);
        w.text(s);
        w.close("p");
    }
    w.close("header");
}

fn write_hero(
    w: &mut HtmlWriter,
    settings: &HeroSettings,
    slides: &[Slide],
    interval_ms: Option<u64>,
) {
    let hero_css = css(&[("height", settings.height.into())]);
    let interval = interval_ms.map(|ms| ms.to_string());
    let mut attrs = vec![("class", "vt-hero"), ("style", hero_css.as_str())];
    if let Some(ms) = interval.as_deref() {
        attrs.push(("data-interval-ms", ms));
    }
    w.open("div", &attrs);
    for (i, slide) in slides.iter().enumerate() {
        let idx = i.to_string();
        let mut attrs = vec![("class", "vt-slide"), ("data-index", idx.as_str())];
        if i > 0 {
            attrs.push(("hidden", "hidden"));
        }
        w.open("div", &attrs);
        if is_safe_url(&slide.image) {
            w.open(
                "img",
                &[
                    ("src", &slide.image),
                    ("alt", slide.title.as_deref().unwrap_or("")),
                ],
            );
        }
        w.open("div", &[("class", "vt-slide-copy")]);
        if let Some(t) = &slide.title {
            w.open("h2", &[]);
            w.text(t);
            w.close("h2");
        }
        if let Some(s) = &slide.subtitle {
            w.open("p", &[]);
            w.text(s);
            w.close("p");
        }
        if let Some(cta) = &slide.cta_text {
            match slide.cta_link.as_deref().filter(|l| is_safe_url(l)) {
                Some(link) => w.open("a", &[("class", "vt-cta"), ("href", link)]),
                None => w.open("a", &[("class", "vt-cta")]),
            }
            w.text(cta);
            w.close("a");
        }
        w.close("div");
        w.close("div");
    }
    if slides.len() > 1 {
        if settings.show_arrows {
            for (dir, label) in [("prev", "Previous slide"), ("next", "Next slide")] {
                w.open(
                    "button",
                    &[("type", "button"), ("data-slide", dir), ("aria-label", label)],
                );
                w.close("button");
            }
        }
        if settings.show_dots {
            w.open("div", &[("class", "vt-dots")]);
            for i in 0..slides.len() {
                let idx = i.to_string();
                w.open("button", &[("type", "button"), ("data-slide", &idx)]);
                w.close("button");
            }
            w.close("div");
        }
    }
    w.close("div");
}

fn write_items(
    w: &mut HtmlWriter,
    scope: &str,
    items: &[DisplayItem<'_>],
    plan: &LayoutPlan,
    config: &EngineConfig,
) {
    match plan {
        LayoutPlan::Grid {
            desktop_columns,
            mobile_columns,
        } => {
            w.raw(&format!(
                "<style>.{scope} .vt-grid{{display:grid;gap:24px;grid-template-columns:repeat({},minmax(0,1fr));}}@media (max-width:{}px){{.{scope} .vt-grid{{grid-template-columns:repeat({},minmax(0,1fr));}}}}</style>",
                desktop_columns.get(),
                config.breakpoints.mobile_max_px,
                mobile_columns.get(),
            ));
            w.open("div", &[("class", "vt-grid")]);
            for item in items {
                write_item(w, item, None, config);
            }
            w.close("div");
        }
        LayoutPlan::Slider { item_width, gap } => {
            let track_css = css(&[
                ("display", Value::String("flex".into())),
                ("gap", (*gap).into()),
                ("overflowX", Value::String("auto".into())),
            ]);
            let item_css = css(&[("flex", Value::String(format!("0 0 {item_width}px")))]);
            w.open("div", &[("class", "vt-slider")]);
            w.open(
                "button",
                &[("type", "button"), ("data-scroll", "prev"), ("aria-label", "Previous")],
            );
            w.close("button");
            w.open("div", &[("class", "vt-slider-track"), ("style", &track_css)]);
            for item in items {
                write_item(w, item, Some(&item_css), config);
            }
            w.close("div");
            w.open(
                "button",
                &[("type", "button"), ("data-scroll", "next"), ("aria-label", "Next")],
            );
            w.close("button");
            w.close("div");
        }
    }
}

fn write_item(w: &mut HtmlWriter, item: &DisplayItem<'_>, css: Option<&str>, config: &EngineConfig) {
    let mut attrs = vec![("class", "vt-card"), ("data-id", item.id())];
    if let Some(c) = css {
        attrs.push(("style", c));
    }
    w.open("div", &attrs);
    match item {
        DisplayItem::Product(p) => write_product(w, p, config),
        DisplayItem::Collection(c) => write_collection(w, c),
        DisplayItem::Video(v) => write_video(w, v),
    }
    w.close("div");
}

fn write_image(w: &mut HtmlWriter, src: Option<&str>, alt: &str) {
    if let Some(src) = src.filter(|s| is_safe_url(s)) {
        w.open("img", &[("src", src), ("alt", alt), ("loading", "lazy")]);
    }
}

fn write_product(w: &mut HtmlWriter, p: &Product, config: &EngineConfig) {
    write_image(w, p.display_image(), &p.name);
    w.open("span", &[("class", "vt-card-title")]);
    w.text(&p.name);
    w.close("span");
    w.open("span", &[("class", "vt-card-price")]);
    w.text(&config.format_price(p.price));
    w.close("span");
    if let Some(cmp) = p.compare_at_price.filter(|c| *c > p.price) {
        w.open("s", &[("class", "vt-card-compare")]);
        w.text(&config.format_price(cmp));
        w.close("s");
    }
}

fn write_collection(w: &mut HtmlWriter, c: &Collection) {
    write_image(w, c.image.as_deref(), &c.name);
    w.open("span", &[("class", "vt-card-title")]);
    w.text(&c.name);
    w.close("span");
    if let Some(d) = &c.description {
        w.open("p", &[]);
        w.text(d);
        w.close("p");
    }
}

fn write_video(w: &mut HtmlWriter, v: &Video) {
    if is_safe_url(&v.url) {
        let mut attrs = vec![("src", v.url.as_str()), ("controls", "controls"), ("preload", "none")];
        if let Some(poster) = v.thumbnail.as_deref().filter(|t| is_safe_url(t)) {
            attrs.push(("poster", poster));
        }
        w.open("video", &attrs);
        w.close("video");
    }
    if let Some(t) = &v.title {
        w.open("span", &[("class", "vt-card-title")]);
        w.text(t);
        w.close("span");
    }
}

fn write_newsletter(w: &mut HtmlWriter, settings: &NewsletterSettings) {
    write_header(w, &settings.style);
    w.open("form", &[("class", "vt-newsletter"), ("method", "post")]);
    w.open(
        "input",
        &[
            ("type", "email"),
            ("name", "email"),
            ("required", "required"),
            ("placeholder", &settings.placeholder),
        ],
    );
    w.open("button", &[("type", "submit")]);
    w.text(&settings.button_text);
    w.close("button");
    w.close("form");
}
