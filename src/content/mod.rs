//! The fixed HackTrack deck content.
//!
//! Eleven slides: a title slide, four bulleted content slides, four
//! screenshot-placeholder slides, a live-demo slide, and a closing slide.
//! Everything except the presenter details is a literal.

use crate::common::units::inches;
use crate::config::DeckConfig;
use crate::deck::format::{Align, RgbColor, TextFormat};
use crate::deck::{Layout, Presentation};

/// The HackTrack brand accent color, RGB(102, 110, 241).
pub const ACCENT: RgbColor = RgbColor::new(102, 110, 241);

/// Font size of the title slide's main heading, in points.
const TITLE_SIZE: f64 = 54.0;
/// Font size of content slide headings, in points.
const HEADING_SIZE: f64 = 40.0;
/// Font size of body bullets, in points.
const BULLET_SIZE: f64 = 18.0;

/// Build the complete HackTrack presentation.
pub fn build_deck(config: &DeckConfig) -> Presentation {
    let mut pres = Presentation::new_widescreen();
    pres.properties_mut().title = Some("HackTrack".to_string());
    pres.properties_mut().creator = Some(config.presenter.name.clone());

    let p = &config.presenter;

    // SLIDE 1: Title
    add_title_slide(
        &mut pres,
        "HackTrack",
        "Your Gateway to Tech Opportunities - Connecting Students with Hackathons, Internships & Events Across India",
        &format!(
            "{} | {} | {}\nGitHub: {}",
            p.name, p.college, p.date, p.project_github
        ),
    );

    // SLIDE 2: Problem Statement
    add_content_slide(
        &mut pres,
        "The Challenge Students Face",
        &[
            "📌 Students miss hackathon & internship opportunities",
            "📌 Information scattered across 50+ platforms",
            "📌 No centralized tracking system",
            "📌 Difficult to find relevant opportunities",
            "📌 Missing application deadlines regularly",
            "",
            "Statistics:",
            "• 70% students miss opportunities due to lack of awareness",
            "• Average student spends 5+ hours searching weekly",
            "• 85% want a centralized platform",
        ],
    );

    // SLIDE 3: Solution
    add_content_slide(
        &mut pres,
        "Our Solution: HackTrack",
        &[
            "One Platform. All Opportunities.",
            "",
            "✅ 100+ Real Opportunities",
            "  • 35+ Hackathons (Smart India Hackathon, Google, Microsoft)",
            "  • 40+ Internships (FAANG to Startups)",
            "  • 30+ Events (DevFest, React India, AWS Community)",
            "",
            "✅ Smart Features",
            "  • Advanced filtering (28 options)",
            "  • Real-time countdown timers",
            "  • Direct registration links",
            "",
            "🎯 \"Never Miss a Tech Opportunity Again!\"",
        ],
    );

    // SLIDE 4: Key Features
    add_content_slide(
        &mut pres,
        "Feature Highlights",
        &[
            "🔍 Smart Search & Filters - 28+ options, real-time updates",
            "⏰ Countdown Timers - 5 urgency states, auto-updates",
            "👤 User Profiles - Photo upload, status badges",
            "🔐 Secure Authentication - JWT tokens, Google OAuth",
            "📊 Dashboard Analytics - Personalized recommendations",
            "🔗 Direct Registration - One-click to actual forms",
        ],
    );

    // SLIDE 5: Tech Stack
    add_content_slide(
        &mut pres,
        "Technology Stack",
        &[
            "Frontend:",
            "  ⚛️ React 18+ | 🎨 Framer Motion | 🎯 React Router",
            "",
            "Backend:",
            "  🚀 Node.js + Express.js",
            "  🗄️ MongoDB Atlas",
            "  🔐 JWT Authentication",
            "  📤 Multer (File uploads)",
            "  🔒 bcrypt (Security)",
            "",
            "DevOps:",
            "  📦 npm | 🔄 Git & GitHub | 🌐 RESTful APIs",
        ],
    );

    // SLIDES 6-9: Screenshot placeholders
    add_screenshot_slide(
        &mut pres,
        "Homepage - First Impression",
        &format!(
            "📸 INSERT SCREENSHOT HERE: {}/\n\nKey Sections:\n• Hero with gradient\n• Feature cards\n• Statistics\n• Featured opportunities",
            p.demo_url
        ),
    );
    add_screenshot_slide(
        &mut pres,
        "Secure Login & Registration",
        "📸 INSERT SCREENSHOTS: Login & Signup\n\nFeatures:\n• Email/Password auth\n• Google OAuth 2.0\n• JWT tokens (30-day)\n• Password hashing",
    );
    add_screenshot_slide(
        &mut pres,
        "Personalized Dashboard",
        "📸 INSERT SCREENSHOT: Dashboard\n\nFeatures:\n• Quick Stats\n• Personalized Recommendations\n• Upcoming Deadlines\n• Real-time Updates",
    );
    add_screenshot_slide(
        &mut pres,
        "Hackathons - Find Your Challenge",
        "📸 INSERT SCREENSHOT: Hackathons page\n\nFeatures:\n• Smart FilterPanel (28 options)\n• Real-time Countdown Timers\n• Event Details\n• Apply Now buttons",
    );

    // SLIDE 10: Live Demo
    let live_url = format!("🌐 Live URL: {}", p.demo_url);
    let repo_url = format!("📂 GitHub: {}", p.project_github);
    add_content_slide(
        &mut pres,
        "Live Demonstration",
        &[
            live_url.as_str(),
            repo_url.as_str(),
            "",
            "Demo Flow:",
            "1. Homepage → Feature overview",
            "2. Login/Signup → Authentication",
            "3. Dashboard → Personalized view",
            "4. Hackathons → Filters in action",
            "5. Profile → User management",
            "6. Apply Now → Direct registration",
            "",
            "\"Let me show you the live application...\"",
        ],
    );

    // SLIDE 11: Thank You / Q&A
    add_closing_slide(
        &mut pres,
        &format!("📧 {}\n🔗 GitHub: {}\n🌐 {}", p.email, p.github, p.demo_url),
    );

    pres
}

/// Add the title slide: three centered text boxes on a blank layout.
fn add_title_slide(pres: &mut Presentation, title: &str, subtitle: &str, footer: &str) {
    let slide = pres.add_slide(Layout::Blank);

    slide
        .add_text_box(inches(1.0), inches(1.5), inches(8.0), inches(1.0))
        .set_text(
            title,
            TextFormat::new()
                .size(TITLE_SIZE)
                .bold(true)
                .color(ACCENT)
                .align(Align::Center),
        );

    slide
        .add_text_box(inches(1.0), inches(2.5), inches(8.0), inches(0.6))
        .set_text(subtitle, TextFormat::new().size(24.0).align(Align::Center));

    slide
        .add_text_box(inches(1.0), inches(4.0), inches(8.0), inches(1.0))
        .set_text(footer, TextFormat::new().size(16.0).align(Align::Center));
}

/// Add a title-and-content slide with one bullet per list entry.
fn add_content_slide<S: AsRef<str>>(pres: &mut Presentation, title: &str, bullets: &[S]) {
    let slide = pres.add_slide(Layout::TitleAndBody);
    slide.set_title(title, TextFormat::new().size(HEADING_SIZE).color(ACCENT));
    for bullet in bullets {
        slide.add_body_paragraph(bullet.as_ref(), BULLET_SIZE);
    }
}

/// Add a screenshot-placeholder slide: a title plus a newline-separated
/// body block.
fn add_screenshot_slide(pres: &mut Presentation, title: &str, body: &str) {
    let slide = pres.add_slide(Layout::TitleAndBody);
    slide.set_title(title, TextFormat::new().size(HEADING_SIZE).color(ACCENT));
    slide.set_body_text(body, BULLET_SIZE);
}

/// Add the closing slide: thank-you, questions, and contact text boxes.
fn add_closing_slide(pres: &mut Presentation, contact: &str) {
    let slide = pres.add_slide(Layout::Blank);

    slide
        .add_text_box(inches(1.0), inches(1.5), inches(8.0), inches(1.0))
        .set_text(
            "Thank You!",
            TextFormat::new()
                .size(72.0)
                .bold(true)
                .color(ACCENT)
                .align(Align::Center),
        );

    slide
        .add_text_box(inches(1.0), inches(2.5), inches(8.0), inches(0.5))
        .set_text("Questions?", TextFormat::new().size(36.0).align(Align::Center));

    slide
        .add_text_box(inches(1.0), inches(3.5), inches(8.0), inches(1.0))
        .set_text(contact, TextFormat::new().size(16.0).align(Align::Center));
}
