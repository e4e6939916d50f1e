//! The page component: pure renderers for the markup tree plus the
//! interactive view state that drives them.
//!
//! Rendering is deterministic in the résumé content and a small
//! [`ViewState`] snapshot. The export flow runs through a
//! [`ExportBackend`] so tests can substitute the capture and assembly
//! collaborators.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::content::{Contact, EducationEntry, Job, PreviousRole, Project, Resume};
use crate::export::{
    self, artifact_file_name, CaptureOptions, ExportBackend, ExportError, ExportState,
    ExportTicket, PageGeometry, EXPORT_FAILURE_NOTICE,
};
use crate::markup::{
    Accent, BlockRole, ChipPalette, Control, Decor, Node, SectionKind, Span, TextRole,
};
use crate::theme::Tone;
use crate::viewport::{ListenerId, ListenerKind, Viewport};

/// Scroll offset in pixels beyond which the scroll-to-top control shows.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

const DOWNLOAD_LABEL: &str = "Download PDF";
const DOWNLOAD_BUSY_LABEL: &str = "Generating...";
const TERMINAL_TITLE: &str = "resume.terminal";

fn accent_palette(accent: Accent) -> ChipPalette {
    match accent {
        Accent::Cyan => ChipPalette::Cyan,
        Accent::Emerald => ChipPalette::Emerald,
    }
}

fn heading(kind: SectionKind) -> Node {
    Node::text(TextRole::SectionHeading, vec![Span::new(kind.heading())])
}

fn contact_node(contact: &Contact) -> Node {
    let spans = vec![Span::new(contact.label.clone())];
    match &contact.href {
        Some(href) => Node::link(TextRole::Meta, spans, href.clone()),
        None => Node::text(TextRole::Meta, spans),
    }
}

fn card_header(resume: &Resume) -> Node {
    Node::block(
        BlockRole::CardHeader,
        vec![
            Node::text(TextRole::Title, vec![Span::new(resume.person.name.clone())]),
            Node::text(TextRole::Headline, vec![Span::new(resume.person.headline.clone())]),
            Node::block(BlockRole::ContactRow, resume.contacts.iter().map(contact_node).collect()),
        ],
    )
}

fn summary_section(resume: &Resume) -> Node {
    Node::block(
        BlockRole::Section(SectionKind::Summary),
        vec![heading(SectionKind::Summary), Node::text(TextRole::Body, resume.summary.clone())],
    )
}

fn tag_row(tags: &[String], palette: ChipPalette) -> Node {
    Node::block(
        BlockRole::TagRow,
        tags.iter().map(|tag| Node::chip(tag.clone(), palette)).collect(),
    )
}

fn previous_role_block(role: &PreviousRole) -> Node {
    Node::block(
        BlockRole::PreviousRole,
        vec![
            Node::text(TextRole::Label, vec![Span::new("Previous Role:")]),
            Node::text(
                TextRole::Body,
                vec![Span::new(role.title.clone()).toned(Tone::CyanSoft).semibold()],
            ),
            Node::text(TextRole::DateRange, vec![Span::new(role.date_range.clone())]),
            Node::text(TextRole::Body, vec![Span::new(role.description.clone())]),
        ],
    )
}

fn job_entry(job: &Job, accent: Accent) -> Node {
    let mut children = vec![Node::text(
        TextRole::EntryTitle,
        vec![Span::new(job.title.clone())],
    )];
    if let Some(organization) = &job.organization {
        children.push(Node::text(TextRole::Organization, vec![Span::new(organization.clone())]));
    }
    // Date badge picks up the entry's counter colour when an employer is shown.
    let badge_tone = if job.organization.is_some() { Tone::Cyan } else { Tone::Emerald };
    children.push(Node::text(
        TextRole::DateRange,
        vec![Span::new(job.date_range.clone()).toned(badge_tone)],
    ));
    if let Some(tenure) = &job.tenure {
        children.push(Node::text(TextRole::Meta, vec![Span::new(tenure.clone())]));
    }
    children.push(Node::text(TextRole::Body, vec![Span::new(job.description.clone())]));
    if let Some(previous) = &job.previous_role {
        children.push(previous_role_block(previous));
    }
    if !job.tags.is_empty() {
        children.push(tag_row(&job.tags, accent_palette(accent)));
    }
    Node::block(BlockRole::Entry(accent), children)
}

fn experience_section(resume: &Resume) -> Node {
    let mut children = vec![heading(SectionKind::Experience)];
    for (index, job) in resume.experience.iter().enumerate() {
        let accent = if index % 2 == 0 { Accent::Emerald } else { Accent::Cyan };
        children.push(job_entry(job, accent));
    }
    Node::block(BlockRole::Section(SectionKind::Experience), children)
}

fn education_entry(entry: &EducationEntry, accent: Accent) -> Node {
    let mut children = vec![
        Node::text(TextRole::EntryTitle, vec![Span::new(entry.degree.clone())]),
        Node::text(TextRole::Organization, vec![Span::new(entry.institution.clone())]),
    ];
    if let Some(note) = &entry.note {
        children.push(Node::text(TextRole::Meta, vec![Span::new(note.clone())]));
    }
    Node::block(BlockRole::Entry(accent), children)
}

fn education_section(resume: &Resume) -> Node {
    let mut children = vec![heading(SectionKind::Education)];
    for (index, entry) in resume.education.iter().enumerate() {
        let accent = if index % 2 == 0 { Accent::Cyan } else { Accent::Emerald };
        children.push(education_entry(entry, accent));
    }
    Node::block(BlockRole::Section(SectionKind::Education), children)
}

fn project_entry(project: &Project) -> Node {
    Node::block(
        BlockRole::Entry(Accent::Emerald),
        vec![
            Node::text(TextRole::EntryTitle, vec![Span::new(project.title.clone())]),
            Node::text(
                TextRole::DateRange,
                vec![Span::new(project.date_range.clone()).toned(Tone::Emerald)],
            ),
            Node::text(TextRole::Body, vec![Span::new(project.description.clone())]),
        ],
    )
}

fn projects_section(resume: &Resume) -> Node {
    let mut children = vec![heading(SectionKind::Projects)];
    children.extend(resume.projects.iter().map(project_entry));
    Node::block(BlockRole::Section(SectionKind::Projects), children)
}

fn skills_section(resume: &Resume) -> Node {
    Node::block(
        BlockRole::Section(SectionKind::Skills),
        vec![heading(SectionKind::Skills), tag_row(&resume.skills, ChipPalette::Gradient)],
    )
}

/// Renders the card region that capture rasterises. Pure in the content.
pub fn content_card(resume: &Resume) -> Node {
    Node::block(
        BlockRole::Card,
        vec![
            Node::Decor(Decor::Corner(Accent::Cyan)),
            Node::Decor(Decor::Corner(Accent::Emerald)),
            card_header(resume),
            summary_section(resume),
            experience_section(resume),
            education_section(resume),
            projects_section(resume),
            skills_section(resume),
        ],
    )
}

fn terminal_bar() -> Node {
    Node::block(
        BlockRole::TerminalBar,
        vec![
            Node::Decor(Decor::WindowDots),
            Node::text(TextRole::Caption, vec![Span::new(TERMINAL_TITLE).toned(Tone::Cyan)]),
        ],
    )
}

/// Interactive state reflected by the page chrome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub exporting: bool,
    pub show_scroll_top: bool,
    pub pointer: (f64, f64),
}

/// Renders the complete page body for the given state. Pure: equal inputs
/// produce equal trees.
pub fn page_body(resume: &Resume, state: &ViewState) -> Node {
    let download_label = if state.exporting { DOWNLOAD_BUSY_LABEL } else { DOWNLOAD_LABEL };
    let mut children = vec![
        Node::Decor(Decor::Grid),
        Node::Decor(Decor::Orb(Accent::Cyan)),
        Node::Decor(Decor::Orb(Accent::Emerald)),
        Node::Decor(Decor::CursorGlow { x: state.pointer.0, y: state.pointer.1 }),
        terminal_bar(),
        Node::Control(Control::Download {
            label: download_label.to_owned(),
            enabled: !state.exporting,
        }),
        content_card(resume),
        Node::text(TextRole::Footer, resume.footer_credit.clone()),
    ];
    if state.show_scroll_top {
        children.push(Node::Control(Control::ScrollTop));
    }
    Node::block(BlockRole::PageBody, children)
}

/// Outcome of an export request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to `path`.
    Completed { path: PathBuf, pages: usize },
    /// An export was already running; the request did nothing.
    AlreadyRunning,
    /// The export failed. The failure was logged and alerted.
    Failed,
}

struct PageListeners {
    scroll: ListenerId,
    pointer: ListenerId,
}

/// The interactive résumé page.
pub struct ResumeView {
    resume: Resume,
    capture_options: CaptureOptions,
    geometry: PageGeometry,
    export_state: Cell<ExportState>,
    show_scroll_top: bool,
    pointer: (f64, f64),
    listeners: Option<PageListeners>,
}

impl ResumeView {
    pub fn new(resume: Resume) -> Self {
        Self {
            resume,
            capture_options: CaptureOptions::default(),
            geometry: PageGeometry::a4_portrait(),
            export_state: Cell::new(ExportState::Idle),
            show_scroll_top: false,
            pointer: (0.0, 0.0),
            listeners: None,
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn is_exporting(&self) -> bool {
        self.export_state.get() == ExportState::Exporting
    }

    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    pub fn shows_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    /// Registers the scroll and pointer listeners and asks the viewport for
    /// smooth scrolling. Mounting twice is a no-op.
    pub fn mount(&mut self, viewport: &mut Viewport) {
        if self.listeners.is_some() {
            debug!("mount skipped; listeners already registered");
            return;
        }
        viewport.request_smooth_scrolling();
        self.listeners = Some(PageListeners {
            scroll: viewport.listen(ListenerKind::Scroll),
            pointer: viewport.listen(ListenerKind::Pointer),
        });
    }

    /// Releases the listeners registered by [`mount`](Self::mount).
    pub fn unmount(&mut self, viewport: &mut Viewport) {
        if let Some(listeners) = self.listeners.take() {
            viewport.unlisten(listeners.scroll);
            viewport.unlisten(listeners.pointer);
        }
    }

    /// Handles a scroll event carrying the viewport's current offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.show_scroll_top = offset > SCROLL_TOP_THRESHOLD_PX;
    }

    /// Handles a pointer move event.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Scrolls the viewport back to the top and refreshes the affordance.
    pub fn scroll_to_top(&mut self, viewport: &mut Viewport) {
        viewport.scroll_to_top();
        self.on_scroll(viewport.scroll_offset());
    }

    /// Snapshot of the interactive state.
    pub fn state(&self) -> ViewState {
        ViewState {
            exporting: self.is_exporting(),
            show_scroll_top: self.show_scroll_top,
            pointer: self.pointer,
        }
    }

    /// Renders the complete page body.
    pub fn body(&self) -> Node {
        page_body(&self.resume, &self.state())
    }

    /// Renders the card region handed to capture.
    pub fn card(&self) -> Node {
        content_card(&self.resume)
    }

    /// Runs the capture, pagination, assembly, and write pipeline.
    ///
    /// A second request while one is running returns
    /// [`ExportOutcome::AlreadyRunning`] without touching the backend. On
    /// failure the error chain is logged, the viewport shows one alert, and
    /// the view returns to idle either way.
    pub fn download_pdf(
        &self,
        backend: &dyn ExportBackend,
        viewport: &mut Viewport,
        out_dir: &Path,
    ) -> ExportOutcome {
        let Some(_ticket) = ExportTicket::acquire(&self.export_state) else {
            debug!("export request ignored; one is already running");
            return ExportOutcome::AlreadyRunning;
        };
        match self.run_export(backend, out_dir) {
            Ok((path, pages)) => {
                info!("exported {} ({} pages)", path.display(), pages);
                ExportOutcome::Completed { path, pages }
            }
            Err(err) => {
                log_failure(&err);
                viewport.alert(EXPORT_FAILURE_NOTICE);
                ExportOutcome::Failed
            }
        }
    }

    fn run_export(
        &self,
        backend: &dyn ExportBackend,
        out_dir: &Path,
    ) -> Result<(PathBuf, usize), ExportError> {
        let card = content_card(&self.resume);
        let raster = backend.capture(&card, &self.capture_options)?;
        debug!("captured {}x{} raster", raster.width(), raster.height());
        let plan = export::paginate(&raster, self.geometry);
        let bytes = backend.assemble(&raster, &plan)?;
        let path = out_dir.join(artifact_file_name(&self.resume.person.name));
        fs::write(&path, &bytes)
            .map_err(|source| ExportError::Write { path: path.clone(), source })?;
        Ok((path, plan.page_count()))
    }
}

fn log_failure(err: &ExportError) {
    error!("PDF export failed: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        error!("  caused by: {}", cause);
        source = cause.source();
    }
}
