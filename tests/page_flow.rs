use resume_page::content;
use resume_page::markup::{BlockRole, Node};
use resume_page::page::{Page, PageShell};
use resume_page::view::{content_card, page_body, ResumeView, ViewState};
use resume_page::viewport::{ListenerKind, Viewport};

#[test]
fn shell_metadata_matches_the_published_page() {
    let shell = PageShell::default();
    assert_eq!(shell.lang(), "en");
    assert_eq!(shell.title(), "Dhanashri Patil — Software Test Engineer | Resume");
    assert_eq!(
        shell.description(),
        "Professional resume of Dhanashri Patil - Software Test Engineer with expertise in \
         automation and manual testing, skilled in Cypress, Selenium, and Appium."
    );
    assert_eq!(shell.icon_href(), "/favicon.ico");
    assert_eq!(shell.background(), (0x0a, 0x0a, 0x0a));
}

#[test]
fn rendering_is_pure() {
    let resume = content::resume();
    let state = ViewState { show_scroll_top: true, pointer: (120.0, 48.0), ..ViewState::default() };
    assert_eq!(page_body(&resume, &state), page_body(&resume, &state));

    let view = ResumeView::new(resume.clone());
    assert_eq!(view.body(), page_body(&resume, &ViewState::default()));
}

#[test]
fn composed_page_keeps_the_body_tree() {
    let view = ResumeView::new(content::resume());
    let body = view.body();
    let page = Page::compose(PageShell::default(), body.clone());
    assert_eq!(page.body(), &body);
}

#[test]
fn card_text_covers_every_section() {
    let text = content_card(&content::resume()).flatten_text();
    for heading in
        ["Professional Summary", "Work Experience", "Education", "Projects", "Skills"]
    {
        assert!(text.contains(heading), "missing section heading {:?}", heading);
    }
    assert!(text.contains("Dhanashri Patil"));
    assert!(text.contains("Software Test Engineer"));
    assert!(text.contains("Career Break"));
    assert!(text.contains("Previous Role:"));
}

#[test]
fn card_text_lists_every_skill_and_contact() {
    let resume = content::resume();
    let text = content_card(&resume).flatten_text();
    for skill in &resume.skills {
        assert!(text.contains(skill.as_str()), "missing skill {:?}", skill);
    }
    for contact in &resume.contacts {
        assert!(text.contains(contact.label.as_str()), "missing contact {:?}", contact.label);
    }
}

#[test]
fn unique_literals_render_exactly_once() {
    let resume = content::resume();
    let text = content_card(&resume).flatten_text();

    let mut unique: Vec<&str> = vec![resume.person.name.as_str()];
    for contact in &resume.contacts {
        unique.push(contact.label.as_str());
    }
    for job in &resume.experience {
        unique.push(job.date_range.as_str());
        if let Some(organization) = &job.organization {
            unique.push(organization.as_str());
        }
        if let Some(previous) = &job.previous_role {
            unique.push(previous.date_range.as_str());
        }
    }
    for entry in &resume.education {
        unique.push(entry.institution.as_str());
    }
    for project in &resume.projects {
        unique.push(project.title.as_str());
        unique.push(project.date_range.as_str());
    }

    for needle in unique {
        let count = text.matches(needle).count();
        assert_eq!(count, 1, "expected exactly one occurrence of {:?}, found {}", needle, count);
    }
}

#[test]
fn footer_credit_sits_outside_the_card() {
    let resume = content::resume();
    let card_text = content_card(&resume).flatten_text();
    let body_text = page_body(&resume, &ViewState::default()).flatten_text();
    assert!(!card_text.contains("Next.js 14"));
    assert!(body_text.contains("Next.js 14"));
    assert!(body_text.contains("TailwindCSS"));
}

#[test]
fn mount_registers_scroll_and_pointer_listeners() {
    let mut viewport = Viewport::new();
    let mut view = ResumeView::new(content::resume());

    view.mount(&mut viewport);
    assert!(view.is_mounted());
    assert!(viewport.smooth_scrolling());
    assert_eq!(viewport.listener_count(ListenerKind::Scroll), 1);
    assert_eq!(viewport.listener_count(ListenerKind::Pointer), 1);

    // Mounting again must not double-register.
    view.mount(&mut viewport);
    assert_eq!(viewport.total_listeners(), 2);

    view.unmount(&mut viewport);
    assert!(!view.is_mounted());
    assert_eq!(viewport.total_listeners(), 0);

    // Unmounting an unmounted view is harmless.
    view.unmount(&mut viewport);
    assert_eq!(viewport.total_listeners(), 0);
}

#[test]
fn scroll_events_drive_the_affordance() {
    let mut viewport = Viewport::new();
    let mut view = ResumeView::new(content::resume());
    view.mount(&mut viewport);

    viewport.set_scroll_offset(450.0);
    view.on_scroll(viewport.scroll_offset());
    assert!(view.shows_scroll_top());

    view.scroll_to_top(&mut viewport);
    assert_eq!(viewport.scroll_offset(), 0.0);
    assert!(!view.shows_scroll_top());

    view.unmount(&mut viewport);
}

#[test]
fn card_region_carries_no_page_chrome() {
    let card = content_card(&content::resume());
    let mut has_controls = false;
    let mut section_count = 0;
    card.walk(&mut |node| match node {
        Node::Control(_) => has_controls = true,
        Node::Block(block) => {
            if matches!(block.role(), BlockRole::Section(_)) {
                section_count += 1;
            }
        }
        _ => {}
    });
    assert!(!has_controls, "capture region must not include page controls");
    assert_eq!(section_count, 5);
}
