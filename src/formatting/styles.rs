// src/formatting/styles.rs
//! Inline presentation attributes per element kind.
//!
//! The blog theme does not ship styles for imported content, so every
//! element carries its own `style` attribute. Values are complete attribute
//! strings, ready to be spliced into a start tag.

pub struct ImageStyle {
    pub wrapper: &'static str,
    pub img: &'static str,
    pub caption: &'static str,
}

pub struct TableStyle {
    pub table: &'static str,
    pub header_row: &'static str,
    pub header_cell: &'static str,
    pub cell: &'static str,
}

pub struct CalloutStyle {
    pub wrapper: &'static str,
    pub icon: &'static str,
    pub content: &'static str,
}

pub struct ToggleStyle {
    pub details: &'static str,
    pub summary: &'static str,
    pub content: &'static str,
}

pub struct LinkCardStyle {
    pub wrapper: &'static str,
    pub link: &'static str,
}

pub struct VideoStyle {
    pub wrapper: &'static str,
    pub iframe: &'static str,
    pub player: &'static str,
}

pub struct ColumnStyle {
    pub row: &'static str,
    pub column: &'static str,
}

/// The complete style table.
pub struct StyleTable {
    pub image: ImageStyle,
    pub table: TableStyle,
    pub callout: CalloutStyle,
    pub quote: &'static str,
    pub divider: &'static str,
    pub code: &'static str,
    pub inline_code: &'static str,
    pub toggle: ToggleStyle,
    pub bookmark: LinkCardStyle,
    pub video: VideoStyle,
    pub columns: ColumnStyle,
    pub checklist: &'static str,
}

pub const STYLES: StyleTable = StyleTable {
    image: ImageStyle {
        wrapper: r#"style="text-align:center;margin:1.5rem 0;""#,
        img: r#"class="max-w-full h-auto rounded-md" style="max-width:100%;height:auto;display:block;margin:1rem auto;""#,
        caption: r#"style="text-align:center;color:#666;font-size:0.9em;margin-top:0.5rem;""#,
    },
    table: TableStyle {
        table: r#"style="border-collapse:collapse;border:1px solid #ddd;max-width:100%;width:100%;margin:1rem 0;""#,
        header_row: r#"style="background-color:#e2fffb;""#,
        header_cell: r#"style="border:1px solid #ddd;padding:8px 12px;font-weight:bold;text-align:left;""#,
        cell: r#"style="border:1px solid #ddd;padding:8px 12px;text-align:left;""#,
    },
    callout: CalloutStyle {
        wrapper: r#"style="margin:15px 0;padding:15px;border:1px solid #ddd;border-radius:8px;background-color:#f9f9f9;""#,
        icon: r#"style="margin-right:8px;font-size:1.2em;""#,
        content: r#"style="display:inline;""#,
    },
    quote: r#"style="border-left:3px solid #e2fffb;padding:10px 20px;margin:1rem 0;background-color:#f9f9f9;""#,
    divider: r#"style="border:none;border-top:1px solid #ddd;margin:2rem 0;""#,
    code: r#"style="background-color:#1e1e1e;color:#d4d4d4;padding:16px;border-radius:8px;overflow-x:auto;margin:1rem 0;font-family:monospace;font-size:14px;line-height:1.5;""#,
    inline_code: r#"style="background-color:#f0f0f0;padding:2px 4px;border-radius:3px;font-family:monospace;""#,
    toggle: ToggleStyle {
        details: r#"style="margin:1rem 0;border:1px solid #ddd;border-radius:8px;overflow:hidden;""#,
        summary: r#"style="padding:12px 16px;cursor:pointer;font-weight:bold;background-color:#f5f5f5;""#,
        content: r#"style="padding:12px 16px;""#,
    },
    bookmark: LinkCardStyle {
        wrapper: r#"style="margin:1rem 0;padding:12px 16px;border:1px solid #ddd;border-radius:8px;""#,
        link: r#"style="color:#0b6e99;text-decoration:none;""#,
    },
    video: VideoStyle {
        wrapper: r#"style="position:relative;padding-bottom:56.25%;height:0;overflow:hidden;margin:1.5rem 0;""#,
        iframe: r#"style="position:absolute;top:0;left:0;width:100%;height:100%;" frameborder="0" allowfullscreen"#,
        player: r#"style="max-width:100%;margin:1rem auto;display:block;""#,
    },
    columns: ColumnStyle {
        row: r#"style="display:flex;gap:16px;margin:1rem 0;""#,
        column: r#"style="flex:1;min-width:0;padding:0 8px;""#,
    },
    checklist: r#"style="list-style:none;padding-left:0;""#,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_attribute_is_a_complete_style() {
        let attrs = [
            STYLES.image.wrapper,
            STYLES.table.cell,
            STYLES.callout.icon,
            STYLES.quote,
            STYLES.divider,
            STYLES.code,
            STYLES.toggle.summary,
            STYLES.bookmark.link,
            STYLES.video.player,
            STYLES.columns.column,
            STYLES.checklist,
        ];
        for attr in attrs {
            assert!(attr.starts_with("style=\""), "{}", attr);
            assert!(attr.ends_with('"'), "{}", attr);
        }
    }
}
