//! Embedded string table for the start screen.
//!
//! Lookups fall back to English when a locale or a single string is missing.

/// Locale code used when nothing better matches.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Every locale-dependent string the start screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    /// Tagline under the title
    Description,
    /// "Start" section heading
    Start,
    /// Quick action for the blank template
    NewFile,
    /// Opens the create-from-template dialog
    StartFromTemplate,
    /// Opens a file from disk
    OpenFile,
    /// Joins a collaborative session
    OpenCollaborativeSession,
    /// Opens the add-authentication dialog
    AddAuthentication,
    /// Training course link
    CreateTrainingCourse,
    /// "Recent" section heading
    Recent,
    /// Placeholder for an empty recent list
    NoRecentFiles,
    /// "Help" section heading
    Help,
    /// Download/installation link
    DownloadingAndInstalling,
    /// Image labeling walkthrough link
    LabelingImages,
    /// Source repository link
    GithubRepository,
    /// Video channel link
    YoutubeChannel,
    /// Language picker title and status prefix
    Language,
    /// Footer hint under the start screen
    ScreenHint,
    /// Template dialog search placeholder
    SearchHint,
    /// Template dialog search label
    Search,
    /// Template dialog with nothing matching the search
    NoMatchingTemplates,
    /// Template dialog key help
    TemplateDialogHelp,
    /// Path prompt key help
    FilePromptHelp,
    /// Status after a link was copied
    LinkCopied,
    /// Status when a link could not be copied
    OpenInBrowser,
}

impl Text {
    /// Resource key of this string, as used by the desktop app's locale files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Description => "universaldatatool-description",
            Self::Start => "start",
            Self::NewFile => "new-file",
            Self::StartFromTemplate => "start-from-template",
            Self::OpenFile => "open-file",
            Self::OpenCollaborativeSession => "open-collaborative-session",
            Self::AddAuthentication => "add-authentication",
            Self::CreateTrainingCourse => "create-training-course",
            Self::Recent => "recent",
            Self::NoRecentFiles => "no-recent-files",
            Self::Help => "help",
            Self::DownloadingAndInstalling => "downloading-and-installing-udt",
            Self::LabelingImages => "labeling-images",
            Self::GithubRepository => "github-repository",
            Self::YoutubeChannel => "youtube-channel",
            Self::Language => "language",
            Self::ScreenHint => "screen-hint",
            Self::SearchHint => "search-hint",
            Self::Search => "search",
            Self::NoMatchingTemplates => "no-matching-templates",
            Self::TemplateDialogHelp => "template-dialog-help",
            Self::FilePromptHelp => "file-prompt-help",
            Self::LinkCopied => "link-copied",
            Self::OpenInBrowser => "open-in-browser",
        }
    }
}

/// Resolves `text` for the locale `code`.
pub fn translate(code: &str, text: Text) -> &'static str {
    lookup(code, text)
        .or_else(|| lookup(FALLBACK_LANGUAGE, text))
        .unwrap_or_else(|| text.key())
}

/// Whether the table carries strings for `code`.
pub fn has_locale(code: &str) -> bool {
    matches!(code, "en" | "fr" | "cn" | "pt" | "nl")
}

fn lookup(code: &str, text: Text) -> Option<&'static str> {
    match code {
        "en" => Some(english(text)),
        "fr" => Some(french(text)),
        "cn" => Some(chinese(text)),
        "pt" => Some(portuguese(text)),
        "nl" => Some(dutch(text)),
        _ => None,
    }
}

const fn english(text: Text) -> &'static str {
    match text {
        Text::Description => "Collaborate and label any type of data, images, text, or documents, in an easy-to-use interface or programmatically.",
        Text::Start => "Start",
        Text::NewFile => "New File",
        Text::StartFromTemplate => "Start from Template",
        Text::OpenFile => "Open File",
        Text::OpenCollaborativeSession => "Open Collaborative Session",
        Text::AddAuthentication => "Add Authentication",
        Text::CreateTrainingCourse => "Create Training Course",
        Text::Recent => "Recent",
        Text::NoRecentFiles => "No Recent Files",
        Text::Help => "Help",
        Text::DownloadingAndInstalling => "Downloading and Installing UDT",
        Text::LabelingImages => "Labeling Images",
        Text::GithubRepository => "Github Repository",
        Text::YoutubeChannel => "Youtube Channel",
        Text::Language => "Language",
        Text::ScreenHint => "Paste or drop a file path to open it  |  ↑↓: Navigate  |  Enter: Select  |  o: Open file  |  l: Language  |  q: Quit",
        Text::SearchHint => "Press / to search",
        Text::Search => "Search",
        Text::NoMatchingTemplates => "No matching templates",
        Text::TemplateDialogHelp => "↑↓: Navigate  |  /: Search  |  Enter: Select  |  Esc: Close",
        Text::FilePromptHelp => "Enter: Open  |  Esc: Cancel",
        Text::LinkCopied => "Link copied to clipboard",
        Text::OpenInBrowser => "Open in your browser",
    }
}

const fn french(text: Text) -> &'static str {
    match text {
        Text::Description => "Collaborez et étiquetez tout type de données, images, textes ou documents, dans une interface simple ou par programmation.",
        Text::Start => "Commencer",
        Text::NewFile => "Nouveau fichier",
        Text::StartFromTemplate => "Commencer à partir d'un modèle",
        Text::OpenFile => "Ouvrir un fichier",
        Text::OpenCollaborativeSession => "Ouvrir une session collaborative",
        Text::AddAuthentication => "Ajouter une authentification",
        Text::CreateTrainingCourse => "Créer un cours de formation",
        Text::Recent => "Récents",
        Text::NoRecentFiles => "Aucun fichier récent",
        Text::Help => "Aide",
        Text::DownloadingAndInstalling => "Télécharger et installer UDT",
        Text::LabelingImages => "Étiqueter des images",
        Text::GithubRepository => "Dépôt GitHub",
        Text::YoutubeChannel => "Chaîne YouTube",
        Text::Language => "Langue",
        Text::ScreenHint => "Collez ou déposez un chemin de fichier pour l'ouvrir  |  ↑↓ : Naviguer  |  Entrée : Choisir  |  o : Ouvrir un fichier  |  l : Langue  |  q : Quitter",
        Text::SearchHint => "Appuyez sur / pour rechercher",
        Text::Search => "Rechercher",
        Text::NoMatchingTemplates => "Aucun modèle correspondant",
        Text::TemplateDialogHelp => "↑↓ : Naviguer  |  / : Rechercher  |  Entrée : Choisir  |  Échap : Fermer",
        Text::FilePromptHelp => "Entrée : Ouvrir  |  Échap : Annuler",
        Text::LinkCopied => "Lien copié dans le presse-papiers",
        Text::OpenInBrowser => "Ouvrez dans votre navigateur",
    }
}

const fn chinese(text: Text) -> &'static str {
    match text {
        Text::Description => "在易用的界面中或以编程方式协作标注任何类型的数据、图像、文本或文档。",
        Text::Start => "开始",
        Text::NewFile => "新建文件",
        Text::StartFromTemplate => "从模板开始",
        Text::OpenFile => "打开文件",
        Text::OpenCollaborativeSession => "打开协作会话",
        Text::AddAuthentication => "添加身份验证",
        Text::CreateTrainingCourse => "创建培训课程",
        Text::Recent => "最近",
        Text::NoRecentFiles => "没有最近的文件",
        Text::Help => "帮助",
        Text::DownloadingAndInstalling => "下载并安装 UDT",
        Text::LabelingImages => "标注图像",
        Text::GithubRepository => "GitHub 仓库",
        Text::YoutubeChannel => "YouTube 频道",
        Text::Language => "语言",
        Text::ScreenHint => "粘贴或拖放文件路径以打开  |  ↑↓: 导航  |  Enter: 选择  |  o: 打开文件  |  l: 语言  |  q: 退出",
        Text::SearchHint => "按 / 搜索",
        Text::Search => "搜索",
        Text::NoMatchingTemplates => "没有匹配的模板",
        Text::TemplateDialogHelp => "↑↓: 导航  |  /: 搜索  |  Enter: 选择  |  Esc: 关闭",
        Text::FilePromptHelp => "Enter: 打开  |  Esc: 取消",
        Text::LinkCopied => "链接已复制到剪贴板",
        Text::OpenInBrowser => "请在浏览器中打开",
    }
}

const fn portuguese(text: Text) -> &'static str {
    match text {
        Text::Description => "Colabore e rotule qualquer tipo de dado, imagens, textos ou documentos, numa interface fácil de usar ou programaticamente.",
        Text::Start => "Começar",
        Text::NewFile => "Novo arquivo",
        Text::StartFromTemplate => "Começar a partir de um modelo",
        Text::OpenFile => "Abrir arquivo",
        Text::OpenCollaborativeSession => "Abrir sessão colaborativa",
        Text::AddAuthentication => "Adicionar autenticação",
        Text::CreateTrainingCourse => "Criar curso de treinamento",
        Text::Recent => "Recentes",
        Text::NoRecentFiles => "Nenhum arquivo recente",
        Text::Help => "Ajuda",
        Text::DownloadingAndInstalling => "Baixar e instalar o UDT",
        Text::LabelingImages => "Rotulando imagens",
        Text::GithubRepository => "Repositório no GitHub",
        Text::YoutubeChannel => "Canal no YouTube",
        Text::Language => "Idioma",
        Text::ScreenHint => "Cole ou solte o caminho de um arquivo para abri-lo  |  ↑↓: Navegar  |  Enter: Selecionar  |  o: Abrir arquivo  |  l: Idioma  |  q: Sair",
        Text::SearchHint => "Pressione / para pesquisar",
        Text::Search => "Pesquisar",
        Text::NoMatchingTemplates => "Nenhum modelo correspondente",
        Text::TemplateDialogHelp => "↑↓: Navegar  |  /: Pesquisar  |  Enter: Selecionar  |  Esc: Fechar",
        Text::FilePromptHelp => "Enter: Abrir  |  Esc: Cancelar",
        Text::LinkCopied => "Link copiado para a área de transferência",
        Text::OpenInBrowser => "Abra no seu navegador",
    }
}

const fn dutch(text: Text) -> &'static str {
    match text {
        Text::Description => "Werk samen en label elk type data, afbeeldingen, tekst of documenten, in een eenvoudige interface of programmatisch.",
        Text::Start => "Start",
        Text::NewFile => "Nieuw bestand",
        Text::StartFromTemplate => "Beginnen met een sjabloon",
        Text::OpenFile => "Bestand openen",
        Text::OpenCollaborativeSession => "Samenwerkingssessie openen",
        Text::AddAuthentication => "Authenticatie toevoegen",
        Text::CreateTrainingCourse => "Trainingscursus maken",
        Text::Recent => "Recent",
        Text::NoRecentFiles => "Geen recente bestanden",
        Text::Help => "Help",
        Text::DownloadingAndInstalling => "UDT downloaden en installeren",
        Text::LabelingImages => "Afbeeldingen labelen",
        Text::GithubRepository => "GitHub-repository",
        Text::YoutubeChannel => "YouTube-kanaal",
        Text::Language => "Taal",
        Text::ScreenHint => "Plak of sleep een bestandspad om het te openen  |  ↑↓: Navigeren  |  Enter: Kiezen  |  o: Bestand openen  |  l: Taal  |  q: Afsluiten",
        Text::SearchHint => "Druk op / om te zoeken",
        Text::Search => "Zoeken",
        Text::NoMatchingTemplates => "Geen overeenkomende sjablonen",
        Text::TemplateDialogHelp => "↑↓: Navigeren  |  /: Zoeken  |  Enter: Kiezen  |  Esc: Sluiten",
        Text::FilePromptHelp => "Enter: Openen  |  Esc: Annuleren",
        Text::LinkCopied => "Link gekopieerd naar klembord",
        Text::OpenInBrowser => "Open in je browser",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LANGUAGE_OPTIONS;

    #[test]
    fn test_every_offered_language_has_strings() {
        for option in LANGUAGE_OPTIONS {
            assert!(has_locale(option.code), "missing locale {}", option.code);
        }
    }

    #[test]
    fn test_translate_known_locale() {
        assert_eq!(translate("en", Text::NewFile), "New File");
        assert_eq!(translate("fr", Text::NewFile), "Nouveau fichier");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(translate("xx", Text::Recent), "Recent");
        assert!(!has_locale("xx"));
    }

    #[test]
    fn test_screen_chrome_is_translated() {
        for text in [Text::ScreenHint, Text::SearchHint, Text::TemplateDialogHelp, Text::FilePromptHelp] {
            for code in ["fr", "cn", "pt", "nl"] {
                assert_ne!(translate(code, text), translate("en", text), "{code} {text:?}");
            }
        }
        assert_eq!(translate("fr", Text::Language), "Langue");
    }

    #[test]
    fn test_keys_are_kebab_case() {
        for text in [Text::Description, Text::DownloadingAndInstalling, Text::NoRecentFiles] {
            let key = text.key();
            assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{key}");
        }
    }
}
