use std::num::NonZeroUsize;
use std::ops::Range;
use std::time::{Duration, Instant};

use lru::LruCache;
use tracing::{debug, info, warn};

use podlens_logs::LogClassifier;
use podlens_types::{FetchError, LogAnalysis, WorkloadSummary};

use super::grid::{self, GridGeometry, RowWindow};
use super::requests::{RequestTracker, Resource};
use super::{Action, Command, Message};

/// Period of the timer chain driving blink and auto-refresh
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_ANALYSIS_CACHE_SIZE: NonZeroUsize = NonZeroUsize::new(16).unwrap();

/// Lines moved per scroll step in the analysis view
pub const LOG_SCROLL_STEP: usize = 5;
/// Deepest the analysis view scrolls back from the tail
pub const MAX_LOG_OFFSET: usize = 100;

/// Which screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Namespaces,
    Workloads,
    Analysis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Inputs fixed at startup
#[derive(Clone, Debug)]
pub struct StartupOptions {
    /// Namespace to open directly, skipping the namespace list
    pub namespace: Option<String>,
    pub auto_refresh: bool,
    pub refresh_interval: Duration,
    pub analysis_cache_size: NonZeroUsize,
    pub viewport: Viewport,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self {
            namespace: None,
            auto_refresh: true,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            analysis_cache_size: DEFAULT_ANALYSIS_CACHE_SIZE,
            viewport: Viewport::default(),
        }
    }
}

/// The single mutable root of the application.
///
/// Only [`NavigationState::update`] changes it; renderers read it through the
/// accessors below.
pub struct NavigationState {
    view: View,

    // Namespaces
    namespace: Option<String>,
    /// Whether `namespace` was picked from the list (and can be left again)
    namespace_chosen: bool,
    namespaces: Vec<String>,
    selected_namespace: usize,
    highlighted_namespace: Option<String>,
    page_offset: usize,

    // Workloads
    workloads: Vec<WorkloadSummary>,
    selected_workload: usize,
    selected_workload_name: Option<String>,

    // Analysis
    open_workload: Option<String>,
    analyses: LruCache<String, LogAnalysis>,
    log_offset: usize,

    viewport: Viewport,
    help_visible: bool,
    error: Option<FetchError>,
    /// The fetch the user is waiting on, if any
    pending: Option<Resource>,
    requests: RequestTracker,
    should_quit: bool,

    // Timer chain
    auto_refresh: bool,
    refresh_interval: Duration,
    tick_generation: u64,
    refresh_reference: Option<Instant>,
    blink: bool,
}

impl NavigationState {
    pub fn new(options: StartupOptions) -> Self {
        let view = if options.namespace.is_some() {
            View::Workloads
        } else {
            View::Namespaces
        };
        let pending = match view {
            View::Workloads => Resource::Workloads,
            _ => Resource::Namespaces,
        };

        Self {
            view,
            namespace: options.namespace,
            namespace_chosen: false,
            namespaces: Vec::new(),
            selected_namespace: 0,
            highlighted_namespace: None,
            page_offset: 0,
            workloads: Vec::new(),
            selected_workload: 0,
            selected_workload_name: None,
            open_workload: None,
            analyses: LruCache::new(options.analysis_cache_size),
            log_offset: 0,
            viewport: options.viewport,
            help_visible: false,
            error: None,
            pending: Some(pending),
            requests: RequestTracker::default(),
            should_quit: false,
            auto_refresh: options.auto_refresh,
            refresh_interval: options.refresh_interval,
            tick_generation: 0,
            refresh_reference: None,
            blink: false,
        }
    }

    /// Commands to run once at startup: the first fetch and, when
    /// auto-refresh is on, the first timer tick
    pub fn init(&mut self) -> Vec<Command> {
        let resource = match self.view {
            View::Workloads => Resource::Workloads,
            _ => Resource::Namespaces,
        };

        let mut commands: Vec<Command> = self.request(resource).into_iter().collect();
        if self.auto_refresh {
            commands.push(self.start_tick_chain());
        }
        commands
    }

    /// Apply one message and return the side effects it asks for
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Action(action) => self.apply_action(action),

            Message::Resize { width, height } => {
                self.viewport = Viewport { width, height };
                self.scroll_namespaces_into_view();
                Vec::new()
            }

            Message::Tick { generation, at } => self.on_tick(generation, at),

            Message::NamespacesLoaded { seq, result } => {
                if self.accept(Resource::Namespaces, seq) {
                    match result {
                        Ok(namespaces) => {
                            debug!(count = namespaces.len(), "namespaces loaded");
                            self.namespaces = namespaces;
                            self.error = None;
                            self.resolve_namespace_selection();
                        }
                        Err(e) => self.record_error(e),
                    }
                }
                Vec::new()
            }

            Message::WorkloadsLoaded { seq, result } => {
                if self.accept(Resource::Workloads, seq) {
                    match result {
                        Ok(workloads) => {
                            debug!(count = workloads.len(), "workloads loaded");
                            self.workloads = workloads;
                            self.error = None;
                            self.resolve_workload_selection();
                        }
                        Err(e) => self.record_error(e),
                    }
                }
                Vec::new()
            }

            Message::LogsLoaded {
                seq,
                workload,
                result,
            } => {
                if self.accept(Resource::Logs, seq) {
                    match result {
                        Ok(raw) => self.open_analysis(workload, &raw),
                        Err(e) => self.record_error(e),
                    }
                }
                Vec::new()
            }

            Message::TerminalError(e) => {
                warn!(error = %e, "terminal event error");
                Vec::new()
            }
        }
    }

    fn apply_action(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                vec![Command::Quit]
            }
            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Vec::new()
            }
            Action::DismissError => {
                self.error = None;
                Vec::new()
            }
            Action::Back => {
                self.back();
                Vec::new()
            }
            Action::Select => self.select().into_iter().collect(),
            Action::Refresh => self.refresh().into_iter().collect(),
            Action::ToggleAutoRefresh => {
                self.auto_refresh = !self.auto_refresh;
                info!(enabled = self.auto_refresh, "auto-refresh toggled");
                if self.auto_refresh {
                    vec![self.start_tick_chain()]
                } else {
                    Vec::new()
                }
            }
            Action::Up
            | Action::Down
            | Action::Left
            | Action::Right
            | Action::First
            | Action::Last => {
                match self.view {
                    View::Namespaces => self.move_namespace(action),
                    View::Workloads => self.move_workload(action),
                    View::Analysis => self.scroll_logs(action),
                }
                Vec::new()
            }
        }
    }

    fn select(&mut self) -> Option<Command> {
        match self.view {
            View::Namespaces => {
                let name = self.namespaces.get(self.selected_namespace)?.clone();
                info!(namespace = %name, "namespace selected");

                self.namespace = Some(name);
                self.namespace_chosen = true;
                self.view = View::Workloads;
                self.clear_workloads();
                self.requests.invalidate(Resource::Logs);
                self.request_with_loading(Resource::Workloads)
            }
            View::Workloads => {
                let workload = self.workloads.get(self.selected_workload)?.name.clone();
                self.log_offset = 0;
                self.request_logs(workload)
            }
            View::Analysis => None,
        }
    }

    fn back(&mut self) {
        if self.help_visible {
            self.help_visible = false;
            return;
        }

        match self.view {
            View::Analysis => {
                self.requests.invalidate(Resource::Logs);
                self.pending = None;
                self.view = View::Workloads;
            }
            View::Workloads if self.namespace_chosen => {
                self.requests.invalidate(Resource::Workloads);
                self.requests.invalidate(Resource::Logs);
                self.pending = None;
                self.namespace = None;
                self.namespace_chosen = false;
                self.clear_workloads();
                self.view = View::Namespaces;
            }
            _ => {}
        }
    }

    fn refresh(&mut self) -> Option<Command> {
        match self.view {
            View::Namespaces => self.request_with_loading(Resource::Namespaces),
            View::Workloads => self.request_with_loading(Resource::Workloads),
            View::Analysis => {
                let workload = self.open_workload.clone()?;
                self.request_logs(workload)
            }
        }
    }

    fn on_tick(&mut self, generation: u64, at: Instant) -> Vec<Command> {
        if generation != self.tick_generation || !self.auto_refresh {
            return Vec::new();
        }

        self.blink = !self.blink;

        let mut commands = Vec::new();
        match self.refresh_reference {
            None => self.refresh_reference = Some(at),
            Some(reference) if at.saturating_duration_since(reference) >= self.refresh_interval => {
                self.refresh_reference = Some(at);
                let resource = match self.view {
                    View::Namespaces => Some(Resource::Namespaces),
                    View::Workloads => Some(Resource::Workloads),
                    View::Analysis => None,
                };
                commands.extend(resource.and_then(|r| self.request(r)));
            }
            Some(_) => {}
        }

        commands.push(Command::ScheduleTick {
            generation,
            delay: TICK_INTERVAL,
        });
        commands
    }

    fn start_tick_chain(&mut self) -> Command {
        self.tick_generation += 1;
        self.refresh_reference = None;
        Command::ScheduleTick {
            generation: self.tick_generation,
            delay: TICK_INTERVAL,
        }
    }

    // ------------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------------

    /// Build a list fetch without touching the loading indicator
    fn request(&mut self, resource: Resource) -> Option<Command> {
        let command = match resource {
            Resource::Namespaces => Command::FetchNamespaces {
                seq: self.requests.issue(resource),
            },
            Resource::Workloads => {
                let namespace = self.namespace.clone()?;
                Command::FetchWorkloads {
                    seq: self.requests.issue(resource),
                    namespace,
                }
            }
            Resource::Logs => return None,
        };
        debug!(?command, "requesting");
        Some(command)
    }

    fn request_with_loading(&mut self, resource: Resource) -> Option<Command> {
        let command = self.request(resource)?;
        self.pending = Some(resource);
        Some(command)
    }

    fn request_logs(&mut self, workload: String) -> Option<Command> {
        let namespace = self.namespace.clone()?;
        let command = Command::FetchLogs {
            seq: self.requests.issue(Resource::Logs),
            namespace,
            workload,
        };
        debug!(?command, "requesting");
        self.pending = Some(Resource::Logs);
        Some(command)
    }

    /// Whether a result answers the latest request of its kind
    fn accept(&mut self, resource: Resource, seq: u64) -> bool {
        if !self.requests.is_current(resource, seq) {
            debug!(?resource, seq, "dropping stale result");
            return false;
        }
        if self.pending == Some(resource) {
            self.pending = None;
        }
        true
    }

    fn record_error(&mut self, error: FetchError) {
        warn!(%error, "fetch failed");
        self.error = Some(error);
    }

    fn open_analysis(&mut self, workload: String, raw: &str) {
        let analysis = LogClassifier::classify(raw);
        debug!(
            workload = %workload,
            lines = analysis.total_lines,
            errors = analysis.error_count(),
            warnings = analysis.warning_count(),
            "logs classified"
        );

        self.analyses.put(workload.clone(), analysis);
        self.selected_workload_name = Some(workload.clone());
        self.resolve_workload_selection();
        self.open_workload = Some(workload);
        self.error = None;
        self.view = View::Analysis;
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    fn move_namespace(&mut self, action: Action) {
        let Some(last) = self.namespaces.len().checked_sub(1) else {
            return;
        };
        let current = self.selected_namespace;

        self.selected_namespace = match action {
            Action::Up | Action::Left => current.saturating_sub(1),
            Action::Down | Action::Right => (current + 1).min(last),
            Action::First => 0,
            Action::Last => last,
            _ => current,
        };
        self.highlighted_namespace = self.namespaces.get(self.selected_namespace).cloned();
        self.scroll_namespaces_into_view();
    }

    fn move_workload(&mut self, action: Action) {
        let count = self.workloads.len();
        let Some(last) = count.checked_sub(1) else {
            return;
        };
        let geometry = self.grid_geometry();
        let columns = geometry.items_per_row;
        let current = self.selected_workload;
        let column = geometry.column_of(current);

        self.selected_workload = match action {
            Action::Up if current >= columns => current - columns,
            Action::Down if current + columns < count => current + columns,
            Action::Left if column > 0 => current - 1,
            Action::Right if column + 1 < columns && current < last => current + 1,
            Action::First => 0,
            Action::Last => last,
            _ => current,
        };
        self.selected_workload_name = self
            .workloads
            .get(self.selected_workload)
            .map(|w| w.name.clone());
    }

    fn scroll_logs(&mut self, action: Action) {
        self.log_offset = match action {
            Action::Up => (self.log_offset + LOG_SCROLL_STEP).min(MAX_LOG_OFFSET),
            Action::Down => self.log_offset.saturating_sub(LOG_SCROLL_STEP),
            Action::First => MAX_LOG_OFFSET,
            Action::Last => 0,
            _ => self.log_offset,
        };
    }

    /// Point the namespace index back at the highlighted name, or clamp it
    fn resolve_namespace_selection(&mut self) {
        let found = self
            .highlighted_namespace
            .as_ref()
            .and_then(|name| self.namespaces.iter().position(|ns| ns == name));
        let clamped = self
            .selected_namespace
            .min(self.namespaces.len().saturating_sub(1));

        self.selected_namespace = found.unwrap_or(clamped);
        self.highlighted_namespace = self.namespaces.get(self.selected_namespace).cloned();
        self.scroll_namespaces_into_view();
    }

    /// Point the workload index back at the selected name, or clamp it
    fn resolve_workload_selection(&mut self) {
        let found = self
            .selected_workload_name
            .as_ref()
            .and_then(|name| self.workloads.iter().position(|w| &w.name == name));
        let clamped = self
            .selected_workload
            .min(self.workloads.len().saturating_sub(1));

        self.selected_workload = found.unwrap_or(clamped);
        self.selected_workload_name = self
            .workloads
            .get(self.selected_workload)
            .map(|w| w.name.clone());
    }

    /// Move the page offset the least amount that keeps the selection visible
    fn scroll_namespaces_into_view(&mut self) {
        let page = grid::max_visible_namespaces(self.viewport.height);

        if self.selected_namespace < self.page_offset {
            self.page_offset = self.selected_namespace;
        } else if self.selected_namespace >= self.page_offset + page {
            self.page_offset = self.selected_namespace + 1 - page;
        }

        let max_offset = self.namespaces.len().saturating_sub(page);
        self.page_offset = self.page_offset.min(max_offset);
    }

    fn clear_workloads(&mut self) {
        self.workloads.clear();
        self.selected_workload = 0;
        self.selected_workload_name = None;
        self.open_workload = None;
    }

    // ------------------------------------------------------------------------
    // Accessors for rendering
    // ------------------------------------------------------------------------

    pub fn view(&self) -> View {
        self.view
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether `Back` leaves the workload view
    pub fn can_leave_workloads(&self) -> bool {
        self.namespace_chosen
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn selected_namespace_index(&self) -> usize {
        self.selected_namespace
    }

    pub fn page_offset(&self) -> usize {
        self.page_offset
    }

    /// Indices of the namespaces on the current page
    pub fn namespace_window(&self) -> Range<usize> {
        let page = grid::max_visible_namespaces(self.viewport.height);
        let end = self.namespaces.len().min(self.page_offset + page);
        self.page_offset.min(end)..end
    }

    pub fn workloads(&self) -> &[WorkloadSummary] {
        &self.workloads
    }

    pub fn selected_workload_index(&self) -> usize {
        self.selected_workload
    }

    pub fn selected_workload(&self) -> Option<&WorkloadSummary> {
        self.workloads.get(self.selected_workload)
    }

    pub fn grid_geometry(&self) -> GridGeometry {
        grid::compute_grid(self.viewport.width, self.workloads.len())
    }

    /// Grid rows drawn for the current selection
    pub fn visible_rows(&self) -> RowWindow {
        let geometry = self.grid_geometry();
        grid::visible_rows(
            self.viewport.height,
            geometry.total_rows,
            geometry.row_of(self.selected_workload),
        )
    }

    /// Name of the workload shown in the analysis view
    pub fn open_workload(&self) -> Option<&str> {
        self.open_workload.as_deref()
    }

    /// Analysis of the open workload, without touching recency
    pub fn current_analysis(&self) -> Option<&LogAnalysis> {
        self.analyses.peek(self.open_workload.as_ref()?)
    }

    pub fn has_analysis(&self, workload: &str) -> bool {
        self.analyses.contains(workload)
    }

    pub fn log_offset(&self) -> usize {
        self.log_offset
    }

    /// Slice of `total` log lines visible at the current scroll offset
    pub fn log_window(&self, total: usize) -> Range<usize> {
        grid::log_window(
            total,
            grid::max_visible_log_lines(self.viewport.height),
            self.log_offset,
        )
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn blink(&self) -> bool {
        self.blink
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn workloads(list: &[&str]) -> Vec<WorkloadSummary> {
        list.iter()
            .map(|name| WorkloadSummary::new(*name, "Running"))
            .collect()
    }

    fn fetch_seq(commands: &[Command]) -> u64 {
        commands
            .iter()
            .find_map(|c| match c {
                Command::FetchNamespaces { seq }
                | Command::FetchWorkloads { seq, .. }
                | Command::FetchLogs { seq, .. } => Some(*seq),
                _ => None,
            })
            .expect("no fetch command")
    }

    fn with_options(options: StartupOptions) -> NavigationState {
        NavigationState::new(options)
    }

    /// Namespace list loaded, nothing selected yet
    fn browsing(list: &[&str]) -> NavigationState {
        let mut state = with_options(StartupOptions::default());
        let seq = fetch_seq(&state.init());
        state.update(Message::NamespacesLoaded {
            seq,
            result: Ok(names(list)),
        });
        state
    }

    /// Namespace `shop` chosen interactively and its workloads loaded
    fn in_shop(list: &[&str]) -> NavigationState {
        let mut state = browsing(&["default", "shop"]);
        state.update(Message::Action(Action::Down));
        let seq = fetch_seq(&state.update(Message::Action(Action::Select)));
        state.update(Message::WorkloadsLoaded {
            seq,
            result: Ok(workloads(list)),
        });
        state
    }

    fn open_logs(state: &mut NavigationState, raw: &str) {
        let commands = state.update(Message::Action(Action::Select));
        let Some(Command::FetchLogs { seq, workload, .. }) = commands.into_iter().next() else {
            panic!("expected a log fetch");
        };
        state.update(Message::LogsLoaded {
            seq,
            workload,
            result: Ok(raw.to_string()),
        });
    }

    #[test]
    fn test_init_without_namespace() {
        let mut state = with_options(StartupOptions::default());
        assert_eq!(state.view(), View::Namespaces);
        assert!(state.is_loading());

        let commands = state.init();
        assert_eq!(
            commands,
            vec![
                Command::FetchNamespaces { seq: 1 },
                Command::ScheduleTick {
                    generation: 1,
                    delay: TICK_INTERVAL
                },
            ]
        );
    }

    #[test]
    fn test_init_with_preselected_namespace() {
        let mut state = with_options(StartupOptions {
            namespace: Some("shop".into()),
            auto_refresh: false,
            ..Default::default()
        });
        assert_eq!(state.view(), View::Workloads);

        let commands = state.init();
        assert_eq!(
            commands,
            vec![Command::FetchWorkloads {
                seq: 1,
                namespace: "shop".into()
            }]
        );
    }

    #[test]
    fn test_namespaces_loaded() {
        let state = browsing(&["default", "kube-system"]);
        assert_eq!(state.namespaces(), ["default", "kube-system"]);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_select_namespace() {
        let mut state = browsing(&["default", "shop"]);
        state.update(Message::Action(Action::Down));
        let commands = state.update(Message::Action(Action::Select));

        assert_eq!(state.view(), View::Workloads);
        assert_eq!(state.namespace(), Some("shop"));
        assert!(state.is_loading());
        assert!(matches!(
            commands.as_slice(),
            [Command::FetchWorkloads { namespace, .. }] if namespace == "shop"
        ));
    }

    #[test]
    fn test_select_with_nothing_highlighted() {
        let mut state = browsing(&[]);
        assert!(state.update(Message::Action(Action::Select)).is_empty());
        assert_eq!(state.view(), View::Namespaces);

        let mut state = in_shop(&[]);
        assert!(state.update(Message::Action(Action::Select)).is_empty());
        assert_eq!(state.view(), View::Workloads);
    }

    #[test]
    fn test_select_workload_waits_for_logs() {
        let mut state = in_shop(&["api", "web"]);
        state.update(Message::Action(Action::Down));
        let commands = state.update(Message::Action(Action::Select));

        assert_eq!(state.view(), View::Workloads);
        let seq = fetch_seq(&commands);
        assert_eq!(
            commands,
            vec![Command::FetchLogs {
                seq,
                namespace: "shop".into(),
                workload: "web".into()
            }]
        );

        state.update(Message::LogsLoaded {
            seq,
            workload: "web".into(),
            result: Ok("INFO starting\nERROR connection refused\nWARN retrying\nplain line".into()),
        });

        assert_eq!(state.view(), View::Analysis);
        assert_eq!(state.open_workload(), Some("web"));
        let analysis = state.current_analysis().unwrap();
        assert_eq!(analysis.total_lines, 4);
        assert_eq!(analysis.error_count(), 1);
        assert_eq!(analysis.warning_count(), 1);
        assert_eq!(analysis.info_count(), 1);
    }

    #[test]
    fn test_select_resets_log_offset() {
        let mut state = in_shop(&["api"]);
        open_logs(&mut state, "line");
        state.update(Message::Action(Action::Up));
        assert_eq!(state.log_offset(), 5);

        state.update(Message::Action(Action::Back));
        state.update(Message::Action(Action::Select));
        assert_eq!(state.log_offset(), 0);
    }

    #[test]
    fn test_back_from_analysis() {
        let mut state = in_shop(&["api"]);
        open_logs(&mut state, "line");
        state.update(Message::Action(Action::Back));
        assert_eq!(state.view(), View::Workloads);
        assert_eq!(state.namespace(), Some("shop"));
    }

    #[test]
    fn test_back_from_chosen_namespace() {
        let mut state = in_shop(&["api"]);
        state.update(Message::Action(Action::Back));
        assert_eq!(state.view(), View::Namespaces);
        assert_eq!(state.namespace(), None);
        assert!(state.workloads().is_empty());
        // The highlight stays where it was
        assert_eq!(state.selected_namespace_index(), 1);
    }

    #[test]
    fn test_back_from_preselected_namespace_is_ignored() {
        let mut state = with_options(StartupOptions {
            namespace: Some("shop".into()),
            ..Default::default()
        });
        state.init();
        state.update(Message::Action(Action::Back));
        assert_eq!(state.view(), View::Workloads);
        assert_eq!(state.namespace(), Some("shop"));
    }

    #[test]
    fn test_back_in_namespaces_is_ignored() {
        let mut state = browsing(&["default"]);
        state.update(Message::Action(Action::Back));
        assert_eq!(state.view(), View::Namespaces);
    }

    #[test]
    fn test_stale_workloads_after_switching_namespace() {
        let mut state = browsing(&["default", "shop"]);
        let first = fetch_seq(&state.update(Message::Action(Action::Select)));
        state.update(Message::Action(Action::Back));
        state.update(Message::Action(Action::Down));
        let second = fetch_seq(&state.update(Message::Action(Action::Select)));

        // Late answer for "default" must not land in "shop"
        state.update(Message::WorkloadsLoaded {
            seq: first,
            result: Ok(workloads(&["from-default"])),
        });
        assert!(state.workloads().is_empty());
        assert!(state.is_loading());

        state.update(Message::WorkloadsLoaded {
            seq: second,
            result: Ok(workloads(&["from-shop"])),
        });
        assert_eq!(state.workloads()[0].name, "from-shop");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_logs_dropped_after_leaving() {
        let mut state = in_shop(&["api"]);
        let seq = fetch_seq(&state.update(Message::Action(Action::Select)));
        state.update(Message::Action(Action::Back));
        assert_eq!(state.view(), View::Namespaces);

        state.update(Message::LogsLoaded {
            seq,
            workload: "api".into(),
            result: Ok("ERROR boom".into()),
        });
        assert_eq!(state.view(), View::Namespaces);
        assert!(!state.has_analysis("api"));
    }

    #[test]
    fn test_fetch_failure_keeps_view() {
        let mut state = in_shop(&["api"]);
        let seq = fetch_seq(&state.update(Message::Action(Action::Select)));
        state.update(Message::LogsLoaded {
            seq,
            workload: "api".into(),
            result: Err(FetchError::Logs {
                workload: "api".into(),
                message: "container not ready".into(),
            }),
        });

        assert_eq!(state.view(), View::Workloads);
        assert!(!state.is_loading());
        assert_eq!(
            state.error().unwrap().to_string(),
            "Failed to load logs for api: container not ready"
        );

        // Next success clears it
        let seq = fetch_seq(&state.update(Message::Action(Action::Refresh)));
        state.update(Message::WorkloadsLoaded {
            seq,
            result: Ok(workloads(&["api"])),
        });
        assert!(state.error().is_none());
    }

    #[test]
    fn test_dismiss_error() {
        let mut state = with_options(StartupOptions::default());
        let seq = fetch_seq(&state.init());
        state.update(Message::NamespacesLoaded {
            seq,
            result: Err(FetchError::Namespaces("forbidden".into())),
        });
        assert!(state.error().is_some());

        state.update(Message::Action(Action::DismissError));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_refresh_per_view() {
        let mut state = browsing(&["default"]);
        assert!(matches!(
            state.update(Message::Action(Action::Refresh)).as_slice(),
            [Command::FetchNamespaces { .. }]
        ));
        assert!(state.is_loading());

        let mut state = in_shop(&["api"]);
        open_logs(&mut state, "line");
        let commands = state.update(Message::Action(Action::Refresh));
        assert!(matches!(
            commands.as_slice(),
            [Command::FetchLogs { workload, .. }] if workload == "api"
        ));
        assert!(state.is_loading());
    }

    #[test]
    fn test_selection_follows_identity() {
        let mut state = in_shop(&["a", "b", "c"]);
        state.update(Message::Action(Action::Last));
        assert_eq!(state.selected_workload().unwrap().name, "c");

        let seq = fetch_seq(&state.update(Message::Action(Action::Refresh)));
        state.update(Message::WorkloadsLoaded {
            seq,
            result: Ok(workloads(&["c", "a", "b"])),
        });
        assert_eq!(state.selected_workload_index(), 0);
        assert_eq!(state.selected_workload().unwrap().name, "c");
    }

    #[test]
    fn test_selection_clamps_when_identity_disappears() {
        let mut state = in_shop(&["a", "b", "c"]);
        state.update(Message::Action(Action::Last));

        let seq = fetch_seq(&state.update(Message::Action(Action::Refresh)));
        state.update(Message::WorkloadsLoaded {
            seq,
            result: Ok(workloads(&["a"])),
        });
        assert_eq!(state.selected_workload_index(), 0);
        assert_eq!(state.selected_workload().unwrap().name, "a");
    }

    #[test]
    fn test_namespace_paging() {
        let list: Vec<String> = (0..50).map(|i| format!("ns-{:02}", i)).collect();
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        let mut state = browsing(&refs);

        // 24 rows tall: pages of 16
        for _ in 0..20 {
            state.update(Message::Action(Action::Down));
        }
        assert_eq!(state.selected_namespace_index(), 20);
        assert_eq!(state.page_offset(), 5);
        assert!(state.namespace_window().contains(&20));

        state.update(Message::Action(Action::Last));
        assert_eq!(state.page_offset(), 34);

        // A taller terminal shows more, so the offset pulls back
        state.update(Message::Resize {
            width: 80,
            height: 100,
        });
        assert_eq!(state.page_offset(), 20);
        assert!(state.namespace_window().contains(&49));

        state.update(Message::Action(Action::First));
        assert_eq!(state.page_offset(), 0);
    }

    #[test]
    fn test_namespace_offset_clamped_on_shorter_list() {
        let list: Vec<String> = (0..40).map(|i| format!("ns-{:02}", i)).collect();
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        let mut state = browsing(&refs);
        state.update(Message::Action(Action::Last));
        assert_eq!(state.page_offset(), 24);

        let seq = fetch_seq(&state.update(Message::Action(Action::Refresh)));
        state.update(Message::NamespacesLoaded {
            seq,
            result: Ok(names(&["a", "b", "c"])),
        });
        assert_eq!(state.page_offset(), 0);
        assert_eq!(state.selected_namespace_index(), 2);
    }

    #[test]
    fn test_grid_movement() {
        let mut state = in_shop(&["w0", "w1", "w2", "w3", "w4", "w5", "w6"]);
        state.update(Message::Resize {
            width: 200,
            height: 40,
        });
        assert_eq!(state.grid_geometry().items_per_row, 4);

        let press = |state: &mut NavigationState, action| {
            state.update(Message::Action(action));
            state.selected_workload_index()
        };

        assert_eq!(press(&mut state, Action::Left), 0);
        assert_eq!(press(&mut state, Action::Up), 0);
        assert_eq!(press(&mut state, Action::Right), 1);
        assert_eq!(press(&mut state, Action::Right), 2);
        assert_eq!(press(&mut state, Action::Down), 6);
        // Last item of a short row
        assert_eq!(press(&mut state, Action::Right), 6);
        assert_eq!(press(&mut state, Action::Up), 2);
        assert_eq!(press(&mut state, Action::Right), 3);
        // End of a full row, no wraparound
        assert_eq!(press(&mut state, Action::Right), 3);
        // Nothing below column 3
        assert_eq!(press(&mut state, Action::Down), 3);
        assert_eq!(press(&mut state, Action::Last), 6);
        assert_eq!(press(&mut state, Action::Left), 5);
        assert_eq!(press(&mut state, Action::Left), 4);
        // Start of a row, no wraparound
        assert_eq!(press(&mut state, Action::Left), 4);
        assert_eq!(press(&mut state, Action::First), 0);
    }

    #[test]
    fn test_selected_row_stays_visible() {
        let list: Vec<String> = (0..30).map(|i| format!("w{}", i)).collect();
        let refs: Vec<&str> = list.iter().map(String::as_str).collect();
        let mut state = in_shop(&refs);
        state.update(Message::Resize {
            width: 100,
            height: 31,
        });

        let moves = [
            Action::Down,
            Action::Down,
            Action::Right,
            Action::Down,
            Action::Down,
            Action::Down,
            Action::Up,
            Action::Last,
            Action::Up,
            Action::Left,
            Action::First,
            Action::Down,
        ];
        for action in moves.iter().cycle().take(60) {
            state.update(Message::Action(*action));
            let geometry = state.grid_geometry();
            let row = geometry.row_of(state.selected_workload_index());
            assert!(state.visible_rows().contains(row));
        }
    }

    #[test]
    fn test_log_offset_bounds() {
        let mut state = in_shop(&["api"]);
        open_logs(&mut state, "line");

        for _ in 0..30 {
            state.update(Message::Action(Action::Up));
            assert!(state.log_offset() <= MAX_LOG_OFFSET);
        }
        assert_eq!(state.log_offset(), 100);

        state.update(Message::Action(Action::Down));
        assert_eq!(state.log_offset(), 95);

        for _ in 0..30 {
            state.update(Message::Action(Action::Down));
        }
        assert_eq!(state.log_offset(), 0);

        state.update(Message::Action(Action::First));
        assert_eq!(state.log_offset(), 100);
        state.update(Message::Action(Action::Last));
        assert_eq!(state.log_offset(), 0);
    }

    #[test]
    fn test_tick_refreshes_after_interval() {
        let mut state = browsing(&["default"]);
        let start = Instant::now();

        // First tick only sets the reference
        let commands = state.update(Message::Tick {
            generation: 1,
            at: start,
        });
        assert_eq!(
            commands,
            vec![Command::ScheduleTick {
                generation: 1,
                delay: TICK_INTERVAL
            }]
        );
        assert!(state.blink());

        let commands = state.update(Message::Tick {
            generation: 1,
            at: start + Duration::from_secs(3),
        });
        assert_eq!(commands.len(), 1);
        assert!(!state.blink());

        let commands = state.update(Message::Tick {
            generation: 1,
            at: start + Duration::from_secs(5),
        });
        assert!(matches!(
            commands.as_slice(),
            [Command::FetchNamespaces { .. }, Command::ScheduleTick { .. }]
        ));
        // Background refresh does not show the loading panel
        assert!(!state.is_loading());
    }

    #[test]
    fn test_tick_never_refetches_logs() {
        let mut state = in_shop(&["api"]);
        open_logs(&mut state, "line");
        let start = Instant::now();

        state.update(Message::Tick {
            generation: 1,
            at: start,
        });
        let commands = state.update(Message::Tick {
            generation: 1,
            at: start + Duration::from_secs(10),
        });
        assert!(matches!(commands.as_slice(), [Command::ScheduleTick { .. }]));
    }

    #[test]
    fn test_toggle_auto_refresh_restarts_chain() {
        let mut state = browsing(&["default"]);

        assert!(state.update(Message::Action(Action::ToggleAutoRefresh)).is_empty());
        assert!(!state.auto_refresh());

        // The running chain dies at its next tick
        let commands = state.update(Message::Tick {
            generation: 1,
            at: Instant::now(),
        });
        assert!(commands.is_empty());

        let commands = state.update(Message::Action(Action::ToggleAutoRefresh));
        assert_eq!(
            commands,
            vec![Command::ScheduleTick {
                generation: 2,
                delay: TICK_INTERVAL
            }]
        );

        // Stray tick from the old chain
        assert!(
            state
                .update(Message::Tick {
                    generation: 1,
                    at: Instant::now(),
                })
                .is_empty()
        );
    }

    #[test]
    fn test_analysis_cache_is_bounded() {
        let mut state = with_options(StartupOptions {
            namespace: Some("shop".into()),
            analysis_cache_size: NonZeroUsize::new(2).unwrap(),
            ..Default::default()
        });
        let seq = fetch_seq(&state.init());
        state.update(Message::WorkloadsLoaded {
            seq,
            result: Ok(workloads(&["a", "b", "c"])),
        });

        for _ in 0..3 {
            open_logs(&mut state, "INFO ready");
            state.update(Message::Action(Action::Back));
            state.update(Message::Action(Action::Down));
        }

        assert!(!state.has_analysis("a"));
        assert!(state.has_analysis("b"));
        assert!(state.has_analysis("c"));
    }

    #[test]
    fn test_refetch_replaces_analysis() {
        let mut state = in_shop(&["api"]);
        open_logs(&mut state, "ERROR boom");
        assert_eq!(state.current_analysis().unwrap().error_count(), 1);

        let seq = fetch_seq(&state.update(Message::Action(Action::Refresh)));
        state.update(Message::LogsLoaded {
            seq,
            workload: "api".into(),
            result: Ok("INFO ready".into()),
        });
        let analysis = state.current_analysis().unwrap();
        assert_eq!(analysis.error_count(), 0);
        assert_eq!(analysis.info_count(), 1);
    }

    #[test]
    fn test_help_overlay() {
        let mut state = in_shop(&["api"]);
        state.update(Message::Action(Action::ToggleHelp));
        assert!(state.help_visible());

        state.update(Message::Action(Action::Back));
        assert!(!state.help_visible());
        assert_eq!(state.view(), View::Workloads);
    }

    #[test]
    fn test_quit() {
        let mut state = browsing(&[]);
        assert_eq!(
            state.update(Message::Action(Action::Quit)),
            vec![Command::Quit]
        );
        assert!(state.should_quit());
    }

    #[test]
    fn test_resize_does_not_fetch() {
        let mut state = browsing(&["default"]);
        let commands = state.update(Message::Resize {
            width: 120,
            height: 40,
        });
        assert!(commands.is_empty());
        assert_eq!(
            state.viewport(),
            Viewport {
                width: 120,
                height: 40
            }
        );
    }
}
