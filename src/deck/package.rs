//! Assembles a [`Presentation`] into an OPC package and serializes it.
//!
//! Static parts come from [`crate::deck::template`]; presentation.xml, the
//! slide parts, and the docProps parts are generated. Relationship creation
//! order matters in two places: the slide master's layout rels must be rId1
//! and rId2 (referenced by the embedded `sldLayoutIdLst`), and the
//! presentation part relates its master before its slides so the master is
//! always rId1.

use crate::deck::error::Result;
use crate::deck::pres::Presentation;
use crate::deck::template;
use crate::opc::constants::{content_type as ct, relationship_type as rt};
use crate::opc::packuri::PackUri;
use crate::opc::part::{BlobPart, Part};
use crate::opc::{OpcPackage, PackageWriter};
use std::path::Path;
use tracing::debug;

/// Serialize a presentation to .pptx bytes.
pub fn to_bytes(pres: &Presentation) -> Result<Vec<u8>> {
    let package = assemble(pres)?;
    Ok(PackageWriter::to_bytes(&package)?)
}

/// Save a presentation to a .pptx file, replacing any existing file.
pub fn save<P: AsRef<Path>>(pres: &Presentation, path: P) -> Result<()> {
    let bytes = to_bytes(pres)?;
    std::fs::write(path.as_ref(), bytes)?;
    debug!(path = %path.as_ref().display(), slides = pres.slide_count(), "wrote package");
    Ok(())
}

/// Build the full OPC package for a presentation.
fn assemble(pres: &Presentation) -> Result<OpcPackage> {
    let mut package = OpcPackage::new();

    // Main presentation part. Relate the master first so it gets rId1,
    // then the slides in order, then the property parts.
    let mut pres_part = BlobPart::new(
        PackUri::new("/ppt/presentation.xml")?,
        ct::PML_PRESENTATION_MAIN.to_string(),
        Vec::new(),
    );
    pres_part.relate_to("slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);

    let mut slide_rel_ids: Vec<String> = Vec::new();
    for index in 0..pres.slide_count() {
        let target = format!("slides/slide{}.xml", index + 1);
        slide_rel_ids.push(pres_part.relate_to(&target, rt::SLIDE));
    }

    pres_part.relate_to("presProps.xml", rt::PRES_PROPS);
    pres_part.relate_to("viewProps.xml", rt::VIEW_PROPS);
    pres_part.relate_to("theme/theme1.xml", rt::THEME);
    pres_part.relate_to("tableStyles.xml", rt::TABLE_STYLES);

    pres_part.set_blob(pres.presentation_xml(&slide_rel_ids).into_bytes());
    package.add_part(Box::new(pres_part))?;

    // Slide master. Layout rels in template order: the embedded
    // sldLayoutIdLst references rId1 and rId2.
    let mut master_part = BlobPart::new(
        PackUri::new("/ppt/slideMasters/slideMaster1.xml")?,
        ct::PML_SLIDE_MASTER.to_string(),
        template::slide_master_xml().as_bytes().to_vec(),
    );
    master_part.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
    master_part.relate_to("../slideLayouts/slideLayout2.xml", rt::SLIDE_LAYOUT);
    master_part.relate_to("../theme/theme1.xml", rt::THEME);
    package.add_part(Box::new(master_part))?;

    // Slide layouts, each related back to the master.
    for (index, xml) in [
        template::slide_layout_title_body_xml(),
        template::slide_layout_blank_xml(),
    ]
    .iter()
    .enumerate()
    {
        let mut layout_part = BlobPart::new(
            PackUri::new(format!("/ppt/slideLayouts/slideLayout{}.xml", index + 1))?,
            ct::PML_SLIDE_LAYOUT.to_string(),
            xml.as_bytes().to_vec(),
        );
        layout_part.relate_to("../slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);
        package.add_part(Box::new(layout_part))?;
    }

    // Theme and property parts (no relationships of their own).
    package.add_part(Box::new(BlobPart::new(
        PackUri::new("/ppt/theme/theme1.xml")?,
        ct::OFC_THEME.to_string(),
        template::theme_xml().as_bytes().to_vec(),
    )))?;
    package.add_part(Box::new(BlobPart::new(
        PackUri::new("/ppt/presProps.xml")?,
        ct::PML_PRES_PROPS.to_string(),
        template::pres_props_xml().as_bytes().to_vec(),
    )))?;
    package.add_part(Box::new(BlobPart::new(
        PackUri::new("/ppt/viewProps.xml")?,
        ct::PML_VIEW_PROPS.to_string(),
        template::view_props_xml().as_bytes().to_vec(),
    )))?;
    package.add_part(Box::new(BlobPart::new(
        PackUri::new("/ppt/tableStyles.xml")?,
        ct::PML_TABLE_STYLES.to_string(),
        template::table_styles_xml().as_bytes().to_vec(),
    )))?;

    // Slide parts, each related to its layout.
    for (index, slide) in pres.slides.iter().enumerate() {
        let mut slide_part = BlobPart::new(
            PackUri::new(format!("/ppt/slides/slide{}.xml", index + 1))?,
            ct::PML_SLIDE.to_string(),
            slide.to_xml().into_bytes(),
        );
        let layout_target = format!(
            "../slideLayouts/slideLayout{}.xml",
            slide.layout().part_index()
        );
        slide_part.relate_to(&layout_target, rt::SLIDE_LAYOUT);
        package.add_part(Box::new(slide_part))?;
    }

    // Document properties.
    package.add_part(Box::new(BlobPart::new(
        PackUri::new("/docProps/core.xml")?,
        ct::OPC_CORE_PROPERTIES.to_string(),
        pres.properties().core_xml().into_bytes(),
    )))?;
    package.add_part(Box::new(BlobPart::new(
        PackUri::new("/docProps/app.xml")?,
        ct::OFC_EXTENDED_PROPERTIES.to_string(),
        pres.properties().app_xml(pres.slide_count()).into_bytes(),
    )))?;

    // Package-level relationships.
    package.relate_to("ppt/presentation.xml", rt::OFFICE_DOCUMENT);
    package.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);
    package.relate_to("docProps/app.xml", rt::EXTENDED_PROPERTIES);

    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::slide::Layout;

    fn two_slide_pres() -> Presentation {
        let mut pres = Presentation::new_widescreen();
        pres.add_slide(Layout::Blank);
        pres.add_slide(Layout::TitleAndBody);
        pres
    }

    #[test]
    fn test_assemble_part_set() {
        let pres = two_slide_pres();
        let package = assemble(&pres).unwrap();

        for name in [
            "/ppt/presentation.xml",
            "/ppt/slideMasters/slideMaster1.xml",
            "/ppt/slideLayouts/slideLayout1.xml",
            "/ppt/slideLayouts/slideLayout2.xml",
            "/ppt/theme/theme1.xml",
            "/ppt/presProps.xml",
            "/ppt/viewProps.xml",
            "/ppt/tableStyles.xml",
            "/ppt/slides/slide1.xml",
            "/ppt/slides/slide2.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(
                package.contains(&PackUri::new(name).unwrap()),
                "missing part {}",
                name
            );
        }
    }

    #[test]
    fn test_master_is_r_id1() {
        let pres = two_slide_pres();
        let package = assemble(&pres).unwrap();

        let pres_part = package
            .iter_parts()
            .find(|p| p.partname().as_str() == "/ppt/presentation.xml")
            .unwrap();
        let master_rel = pres_part.rels().get("rId1").unwrap();
        assert_eq!(master_rel.target_ref(), "slideMasters/slideMaster1.xml");
    }

    #[test]
    fn test_slides_relate_to_their_layout() {
        let pres = two_slide_pres();
        let package = assemble(&pres).unwrap();

        // Slide 1 is blank (layout 2), slide 2 uses title+body (layout 1)
        let slide1 = package
            .iter_parts()
            .find(|p| p.partname().as_str() == "/ppt/slides/slide1.xml")
            .unwrap();
        assert_eq!(
            slide1.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout2.xml"
        );

        let slide2 = package
            .iter_parts()
            .find(|p| p.partname().as_str() == "/ppt/slides/slide2.xml")
            .unwrap();
        assert_eq!(
            slide2.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );
    }

    #[test]
    fn test_empty_presentation_still_packages() {
        let pres = Presentation::new_widescreen();
        let bytes = to_bytes(&pres).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_deterministic_bytes() {
        let pres = two_slide_pres();
        let first = to_bytes(&pres).unwrap();
        let second = to_bytes(&pres).unwrap();
        assert_eq!(first, second);
    }
}
