use post_filters::models::PageContext;
use post_filters::{Config, TemplateRenderer};
use std::io::Write;

fn test_config() -> Config {
    Config::new("https://example.com", "https://cdn.example.com")
}

fn render(template: &str, page: &PageContext) -> anyhow::Result<String> {
    let mut renderer = TemplateRenderer::new(test_config());
    renderer.render_str("test.html", template, page)
}

mod excerpt_filter_tests {
    use super::*;

    #[test]
    fn test_excerpt_filter_renders_first_paragraph() {
        let page = PageContext {
            content: Some("<h1>Title</h1><p>Hello <b>world</b>.</p><p>More.</p>".to_string()),
            ..PageContext::default()
        };
        let out = render("{{ page.content | excerpt }}", &page).expect("render failed");
        assert_eq!(out, "Hello world.");
    }

    #[test]
    fn test_excerpt_filter_errors_without_paragraph() {
        let page = PageContext {
            content: Some("<h1>Only a heading</h1>".to_string()),
            ..PageContext::default()
        };
        assert!(render("{{ page.content | excerpt }}", &page).is_err());
    }

    #[test]
    fn test_excerpt_filter_default_argument() {
        let page = PageContext {
            content: Some("<h1>Only a heading</h1>".to_string()),
            ..PageContext::default()
        };
        let out = render(r#"{{ page.content | excerpt(default="(none)") }}"#, &page)
            .expect("render failed");
        assert_eq!(out, "(none)");
    }

    #[test]
    fn test_excerpt_filter_configured_fallback() {
        let mut config = test_config();
        config.content.excerpt_fallback = Some(String::new());
        let mut renderer = TemplateRenderer::new(config);
        let page = PageContext {
            content: Some("<ul><li>list</li></ul>".to_string()),
            ..PageContext::default()
        };
        let out = renderer
            .render_str("fallback.html", "[{{ page.content | excerpt }}]", &page)
            .expect("render failed");
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_excerpt_filter_rejects_non_string() {
        assert!(render("{{ 42 | excerpt }}", &PageContext::default()).is_err());
    }
}

mod gravatar_filter_tests {
    use super::*;

    #[test]
    fn test_gravatar_filter() {
        let out = render(r#"<img src="{{ "Foo@Bar.com " | gravatar }}">"#, &PageContext::default())
            .expect("render failed");
        assert_eq!(
            out,
            r#"<img src="http://www.gravatar.com/avatar/f3ada405ce890b6f8204094deb12d8a8">"#
        );
    }

    #[test]
    fn test_gravatar_filter_rejects_non_string() {
        assert!(render("{{ 1 | gravatar }}", &PageContext::default()).is_err());
    }
}

mod static_file_function_tests {
    use super::*;

    #[test]
    fn test_static_file_from_page_title() {
        let page = PageContext::with_title("A B");
        let out = render(r#"{{ static_file(path="img/x.png", page=page) }}"#, &page)
            .expect("render failed");
        assert_eq!(out, "https://cdn.example.com/A_B/img/x.png");
    }

    #[test]
    fn test_static_file_page_static_wins() {
        let page = PageContext {
            title: Some("A B".to_string()),
            static_dir: Some("assets-2024".to_string()),
            content: None,
        };
        let out = render(r#"{{ static_file(path="x.png", page=page) }}"#, &page)
            .expect("render failed");
        assert_eq!(out, "https://cdn.example.com/assets-2024/x.png");
    }

    #[test]
    fn test_static_file_explicit_arguments() {
        let page = PageContext::with_title("Ignored");
        let out = render(
            r#"{{ static_file(path="x.png", page=page, title="Other Title") }}|{{ static_file(path="y.png", static="dir") }}"#,
            &page,
        )
        .expect("render failed");
        assert_eq!(
            out,
            "https://cdn.example.com/Other_Title/x.png|https://cdn.example.com/dir/y.png"
        );
    }

    #[test]
    fn test_static_file_without_title_or_static() {
        let page = PageContext::default();
        assert!(render(r#"{{ static_file(path="x.png", page=page) }}"#, &page).is_err());
        assert!(render(r#"{{ static_file(path="x.png") }}"#, &page).is_err());
    }

    #[test]
    fn test_static_file_requires_path() {
        let page = PageContext::with_title("T");
        assert!(render(r#"{{ static_file(page=page) }}"#, &page).is_err());
    }
}

mod cli_tests {
    use super::*;
    use post_filters::cli;

    #[test]
    fn test_cli_excerpt_markdown() {
        let out = cli::excerpt::execute("# Heading\n\nThe *first* paragraph.\n\nNext.", true)
            .expect("excerpt failed");
        assert_eq!(out, "The first paragraph.");
    }

    #[test]
    fn test_cli_excerpt_not_found() {
        assert!(cli::excerpt::execute("<h1>x</h1>", false).is_err());
    }

    #[test]
    fn test_cli_static() {
        let out = cli::static_file::execute("https://cdn.example.com", "img/x.png", Some("A B"), None)
            .expect("static failed");
        assert_eq!(out, "https://cdn.example.com/A_B/img/x.png");
        assert!(cli::static_file::execute("https://cdn.example.com", "x", None, None).is_err());
    }

    #[test]
    fn test_cli_render_with_markdown_content() {
        let page = PageContext {
            title: Some("My Post".to_string()),
            static_dir: None,
            content: Some("Intro with [a link](https://example.com).\n\nBody.".to_string()),
        };
        let out = cli::render::execute(
            test_config(),
            "post.html",
            r#"{{ site.title }}: {{ page.content | excerpt }} {{ static_file(path="cover.jpg", page=page) }}"#,
            page,
            true,
        )
        .expect("render failed");
        assert_eq!(
            out,
            "Untitled: Intro with a link. https://cdn.example.com/My_Post/cover.jpg"
        );
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[site]\ntitle = \"Blog\"\nurl = \"https://example.com\"\nfiles_url = \"/files\"\n\n[content]\nmarkdown = true"
        )
        .expect("write config");

        let config = Config::load(file.path()).expect("load config");
        assert_eq!(config.site.title, "Blog");
        assert_eq!(config.site.files_url, "/files");
        assert!(config.content.markdown);
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(Config::load(&dir.path().join("site.toml")).is_err());
    }

    #[test]
    fn test_page_context_load() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "title = \"Hello\"\nstatic = \"hello-assets\"").expect("write page");

        let page = PageContext::load(file.path()).expect("load page");
        assert_eq!(page.title.as_deref(), Some("Hello"));
        assert_eq!(page.static_dir.as_deref(), Some("hello-assets"));
        assert!(page.content.is_none());
    }
}
