use podlens_types::Language;

/// Every user-facing label, per display language
#[derive(Debug)]
pub struct Strings {
    pub namespace_selection_title: &'static str,
    pub workloads_title: &'static str,
    pub log_analysis_title: &'static str,
    pub namespace: &'static str,

    // Workload details
    pub details: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub ready: &'static str,
    pub not_ready: &'static str,
    pub restarts: &'static str,
    pub age: &'static str,

    // Analysis
    pub log_summary: &'static str,
    pub total_lines: &'static str,
    pub errors: &'static str,
    pub warnings: &'static str,
    pub info: &'static str,
    pub analyzed_at: &'static str,
    pub recent_findings: &'static str,
    pub no_findings: &'static str,
    pub log_lines: &'static str,
    pub showing_lines: &'static str,
    pub status_healthy: &'static str,
    pub status_warnings: &'static str,
    pub status_errors: &'static str,

    // Empty and pending states
    pub no_namespaces: &'static str,
    pub no_workloads: &'static str,
    pub no_analysis: &'static str,
    pub log_empty: &'static str,
    pub loading: &'static str,
    pub error_title: &'static str,
    pub more_above: &'static str,
    pub more_below: &'static str,

    // Status bar
    pub namespaces_count: &'static str,
    pub workloads_count: &'static str,
    pub auto_refresh: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub hint_move: &'static str,
    pub hint_select: &'static str,
    pub hint_open_logs: &'static str,
    pub hint_scroll: &'static str,
    pub hint_back: &'static str,
    pub hint_refresh: &'static str,
    pub hint_help: &'static str,
    pub hint_dismiss: &'static str,
    pub hint_quit: &'static str,

    // Help overlay
    pub help_title: &'static str,
    pub help_navigation: &'static str,
    pub help_actions: &'static str,
    pub help_first_last: &'static str,
    pub help_toggle_help: &'static str,
}

static ENGLISH: Strings = Strings {
    namespace_selection_title: "Kubernetes Namespace Selection",
    workloads_title: "Pods",
    log_analysis_title: "Log Analysis",
    namespace: "Namespace",

    details: "Pod Details",
    name: "Name",
    status: "Status",
    ready: "Ready",
    not_ready: "Not Ready",
    restarts: "Restarts",
    age: "Age",

    log_summary: "Log Summary",
    total_lines: "Total lines",
    errors: "Errors",
    warnings: "Warnings",
    info: "Info",
    analyzed_at: "Analyzed at",
    recent_findings: "Latest Findings",
    no_findings: "No errors or warnings",
    log_lines: "Log Lines",
    showing_lines: "Showing lines",
    status_healthy: "STATUS: Normal",
    status_warnings: "STATUS: Warning",
    status_errors: "STATUS: Error",

    no_namespaces: "Namespace not found",
    no_workloads: "Pod not found",
    no_analysis: "Log analysis not found",
    log_empty: "Log not found or empty",
    loading: "Loading...",
    error_title: "Error",
    more_above: "more above",
    more_below: "more below",

    namespaces_count: "namespaces",
    workloads_count: "pods",
    auto_refresh: "Auto-refresh",
    on: "on",
    off: "off",
    hint_move: "Move",
    hint_select: "Select",
    hint_open_logs: "View logs",
    hint_scroll: "Scroll",
    hint_back: "Back",
    hint_refresh: "Refresh",
    hint_help: "Help",
    hint_dismiss: "Dismiss",
    hint_quit: "Quit",

    help_title: "Controls",
    help_navigation: "Navigation",
    help_actions: "Actions",
    help_first_last: "First / last",
    help_toggle_help: "Toggle this help",
};

static TURKISH: Strings = Strings {
    namespace_selection_title: "Kubernetes Namespace Seçimi",
    workloads_title: "Pod'lar",
    log_analysis_title: "Log Analizi",
    namespace: "Namespace",

    details: "Pod Detayları",
    name: "İsim",
    status: "Durum",
    ready: "Hazır",
    not_ready: "Hazır Değil",
    restarts: "Restart",
    age: "Yaş",

    log_summary: "Log Özeti",
    total_lines: "Toplam satır",
    errors: "Hatalar",
    warnings: "Uyarılar",
    info: "Bilgi",
    analyzed_at: "Analiz zamanı",
    recent_findings: "Son Bulgular",
    no_findings: "Hata veya uyarı yok",
    log_lines: "Log Satırları",
    showing_lines: "Gösterilen satırlar",
    status_healthy: "DURUM: Normal",
    status_warnings: "DURUM: Uyarı var",
    status_errors: "DURUM: Hata var",

    no_namespaces: "Namespace bulunamadı",
    no_workloads: "Pod bulunamadı",
    no_analysis: "Log analizi bulunamadı",
    log_empty: "Log bulunamadı veya boş",
    loading: "Yükleniyor...",
    error_title: "Hata",
    more_above: "yukarıda daha fazla",
    more_below: "aşağıda daha fazla",

    namespaces_count: "namespace",
    workloads_count: "pod",
    auto_refresh: "Otomatik yenileme",
    on: "açık",
    off: "kapalı",
    hint_move: "Hareket",
    hint_select: "Seç",
    hint_open_logs: "Log görüntüle",
    hint_scroll: "Kaydır",
    hint_back: "Geri dön",
    hint_refresh: "Yenile",
    hint_help: "Yardım",
    hint_dismiss: "Kapat",
    hint_quit: "Çıkış",

    help_title: "Kontroller",
    help_navigation: "Gezinme",
    help_actions: "Eylemler",
    help_first_last: "İlk / son",
    help_toggle_help: "Bu yardımı aç/kapat",
};

impl Strings {
    pub fn for_language(language: Language) -> &'static Strings {
        match language {
            Language::English => &ENGLISH,
            Language::Turkish => &TURKISH,
        }
    }
}
