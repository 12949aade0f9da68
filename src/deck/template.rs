//! Static package parts embedded at compile time.
//!
//! These parts are fixed for every generated deck: the slide master, the two
//! layouts the deck uses, the theme, and the presentation/view/table-style
//! property parts. The master's `sldLayoutIdLst` references its layout
//! relationships as rId1 and rId2, so the package assembler must relate the
//! layouts in that order.

/// Slide master with title/body placeholders and the deck text styles.
pub fn slide_master_xml() -> &'static str {
    include_str!("../../resources/slideMaster1.xml")
}

/// Slide layout 1: Title and Content.
pub fn slide_layout_title_body_xml() -> &'static str {
    include_str!("../../resources/slideLayout1.xml")
}

/// Slide layout 2: Blank.
pub fn slide_layout_blank_xml() -> &'static str {
    include_str!("../../resources/slideLayout2.xml")
}

/// Theme with the HackTrack accent palette.
pub fn theme_xml() -> &'static str {
    include_str!("../../resources/theme1.xml")
}

/// Presentation properties.
pub fn pres_props_xml() -> &'static str {
    include_str!("../../resources/presProps.xml")
}

/// View properties.
pub fn view_props_xml() -> &'static str {
    include_str!("../../resources/viewProps.xml")
}

/// Table styles.
pub fn table_styles_xml() -> &'static str {
    include_str!("../../resources/tableStyles.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_references_both_layouts() {
        let xml = slide_master_xml();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#));
    }

    #[test]
    fn test_layout_types() {
        assert!(slide_layout_title_body_xml().contains(r#"type="obj""#));
        assert!(slide_layout_blank_xml().contains(r#"type="blank""#));
    }

    #[test]
    fn test_theme_carries_accent_color() {
        assert!(theme_xml().contains(r#"<a:accent1><a:srgbClr val="666EF1"/></a:accent1>"#));
    }
}
