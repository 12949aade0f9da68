//! End-to-end checks on the generated .pptx package.

use hacktrack_deck::config::DeckConfig;
use hacktrack_deck::content;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::Read;

type PptxArchive = zip::ZipArchive<std::io::Cursor<Vec<u8>>>;

fn build_default_deck_bytes() -> Vec<u8> {
    let config = DeckConfig::default();
    let pres = content::build_deck(&config);
    pres.to_bytes().expect("deck should serialize")
}

fn open_archive(bytes: Vec<u8>) -> PptxArchive {
    zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("output should be a valid ZIP")
}

fn read_member(archive: &mut PptxArchive, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing member {}", name))
        .read_to_string(&mut content)
        .unwrap();
    content
}

/// Count start elements with the given name in an XML document.
fn count_elements(xml: &str, element: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == element.as_bytes() {
                    count += 1;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("XML parse error: {}", e),
        }
    }
    count
}

#[test]
fn save_produces_one_file_at_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("HackTrack_Presentation.pptx");

    let pres = content::build_deck(&DeckConfig::default());
    pres.save(&path).unwrap();

    assert!(path.exists());
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn package_contains_eleven_slides() {
    let mut archive = open_archive(build_default_deck_bytes());

    let slide_count = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .filter(|name| name.starts_with("ppt/slides/") && name.ends_with(".xml"))
        .filter(|name| !name.contains("_rels"))
        .count();
    assert_eq!(slide_count, 11);

    // Every slide is listed in presentation.xml, in order
    let pres_xml = read_member(&mut archive, "ppt/presentation.xml");
    assert_eq!(count_elements(&pres_xml, "p:sldId"), 11);
    for id in 256..267 {
        assert!(pres_xml.contains(&format!(r#"<p:sldId id="{}""#, id)));
    }
}

#[test]
fn content_types_cover_every_part() {
    let mut archive = open_archive(build_default_deck_bytes());
    let types = read_member(&mut archive, "[Content_Types].xml");

    assert!(types.contains(r#"<Default Extension="rels""#));
    for i in 1..=11 {
        assert!(
            types.contains(&format!(
                r#"<Override PartName="/ppt/slides/slide{}.xml""#,
                i
            )),
            "missing content type for slide {}",
            i
        );
    }
    assert!(types.contains(r#"<Override PartName="/ppt/presentation.xml""#));
    assert!(types.contains(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml""#));
    assert!(types.contains(r#"<Override PartName="/docProps/core.xml""#));
}

#[test]
fn bullet_counts_match_the_supplied_lists() {
    let mut archive = open_archive(build_default_deck_bytes());

    // Slide 2 ("The Challenge Students Face"): title paragraph + 10 bullets
    let slide2 = read_member(&mut archive, "ppt/slides/slide2.xml");
    assert_eq!(count_elements(&slide2, "a:p"), 11);
    assert!(slide2.contains("<a:t>The Challenge Students Face</a:t>"));

    // Slide 4 ("Feature Highlights"): title paragraph + 6 bullets
    let slide4 = read_member(&mut archive, "ppt/slides/slide4.xml");
    assert_eq!(count_elements(&slide4, "a:p"), 7);

    // Empty list entries survive as empty paragraphs
    let slide3 = read_member(&mut archive, "ppt/slides/slide3.xml");
    assert_eq!(count_elements(&slide3, "a:p"), 14);
    assert!(slide3.contains("<a:endParaRPr"));
}

#[test]
fn title_slide_renders_contact_footer() {
    let mut archive = open_archive(build_default_deck_bytes());
    let slide1 = read_member(&mut archive, "ppt/slides/slide1.xml");

    // Three text boxes, no placeholders on the blank layout
    assert_eq!(count_elements(&slide1, "p:sp"), 3);
    assert!(!slide1.contains("<p:ph"));

    // Accent color and centered 54pt title
    assert!(slide1.contains(r#"<a:srgbClr val="666EF1"/>"#));
    assert!(slide1.contains(r#"sz="5400""#));
    assert!(slide1.contains(r#"<a:pPr algn="ctr"/>"#));

    // The two-line footer becomes two paragraphs
    assert!(slide1.contains("[Your Name] | [Your College] | October 16, 2025"));
    assert!(slide1.contains("<a:t>GitHub: github.com/mehtakrisha16/HackTrack</a:t>"));
}

#[test]
fn slides_reference_their_layouts() {
    let mut archive = open_archive(build_default_deck_bytes());

    // Slide 1 (title) uses the blank layout
    let rels1 = read_member(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels1.contains("../slideLayouts/slideLayout2.xml"));

    // Slide 2 (content) uses title+body
    let rels2 = read_member(&mut archive, "ppt/slides/_rels/slide2.xml.rels");
    assert!(rels2.contains("../slideLayouts/slideLayout1.xml"));

    // The master references both layouts
    let master_rels = read_member(&mut archive, "ppt/slideMasters/_rels/slideMaster1.xml.rels");
    assert!(master_rels.contains("slideLayout1.xml"));
    assert!(master_rels.contains("slideLayout2.xml"));
}

#[test]
fn rerunning_overwrites_deterministically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");
    let config = DeckConfig::default();

    let pres = content::build_deck(&config);
    pres.save(&path).unwrap();
    let first = std::fs::read(&path).unwrap();

    // A second run with the same inputs replaces the file with identical bytes
    let pres = content::build_deck(&config);
    pres.save(&path).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn app_props_report_slide_count() {
    let mut archive = open_archive(build_default_deck_bytes());
    let app = read_member(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>11</Slides>"));

    let core = read_member(&mut archive, "docProps/core.xml");
    assert!(core.contains("<dc:title>HackTrack</dc:title>"));
    // No timestamps unless explicitly set, to keep output reproducible
    assert!(!core.contains("dcterms:created"));
}
