//! End-to-end tests for the render pipeline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{RenderOptions, Renderer, render, table::assemble_tables};

#[test]
fn empty_document_renders_empty_string() {
    assert_eq!(render(""), "");
}

#[test]
fn whitespace_only_document_renders_empty_string() {
    assert_eq!(render("   \n  \n\n\t"), "");
}

#[test]
fn two_plain_blocks_are_two_paragraphs() {
    assert_eq!(render("Hello\n\nWorld"), "<p>Hello</p><p>World</p>");
}

#[test]
fn leading_blank_lines_add_nothing() {
    assert_eq!(render("\n\n\nHello"), "<p>Hello</p>");
}

#[test]
fn crlf_line_endings() {
    assert_eq!(render("Hello\r\n\r\nWorld"), "<p>Hello</p><p>World</p>");
}

#[rstest]
#[case("# x", "<h1>x</h1>")]
#[case("## x", "<h2>x</h2>")]
#[case("### x", "<h3>x</h3>")]
#[case("#### x", "<h4>x</h4>")]
#[case("##### x", "<h5>x</h5>")]
#[case("###### x", "<h6>x</h6>")]
#[case("####### x", "<p>####### x</p>")]
fn heading_precedence(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render(input), expected);
}

#[test]
fn emphasis_precedence() {
    assert_eq!(
        render("**bold *and italic* still bold**"),
        "<p><b>bold <i>and italic</i> still bold</b></p>"
    );
}

#[rstest]
#[case("*a **b** c*", "<p><i>a <b>b</b> c</i></p>")]
#[case("*x* and **y**", "<p><i>x</i> and <b>y</b></p>")]
#[case("~~*a **b** c*~~", "<p><del><i>a <b>b</b> c</i></del></p>")]
fn bold_nested_in_italic(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render(input), expected);
}

#[test]
fn badge_image_inside_link() {
    insta::assert_snapshot!(
        render("[![badge](http://x/b.png)](http://z)"),
        @r#"<p><a href="http://z" target="_blank"><img src="http://x/b.png" alt="badge" style="max-width: 100%; height: auto;"></a></p>"#
    );
}

#[test]
fn consecutive_rows_form_one_table() {
    assert_eq!(
        render("|a|b|\n|c|d|"),
        "<table><tbody><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></tbody></table>"
    );
}

#[test]
fn table_cells_are_trimmed() {
    insta::assert_snapshot!(
        render("| name | qty |\n|  apples |  3 |"),
        @"<table><tbody><tr><td>name</td><td>qty</td></tr><tr><td>apples</td><td>3</td></tr></tbody></table>"
    );
}

#[test]
fn image_then_link_on_one_line() {
    insta::assert_snapshot!(
        render("![alt](http://x/y.png)[t](http://z)"),
        @r#"<p><img src="http://x/y.png" alt="alt" style="max-width: 100%; height: auto;"><a href="http://z" target="_blank">t</a></p>"#
    );
}

#[test]
fn fenced_content_is_not_interpreted() {
    assert_eq!(
        render("```\n# not a heading\n**not bold**\n```"),
        "<pre><code>\n# not a heading\n**not bold**\n</code></pre>"
    );
}

#[test]
fn fenced_content_is_escaped() {
    assert_eq!(
        render("# Title\n\n```\n<b>**x**</b>\n```\n\nafter"),
        "<h1>Title</h1><pre><code>\n&lt;b&gt;**x**&lt;/b&gt;\n</code></pre><p>after</p>"
    );
}

#[test]
fn fence_survives_blank_lines_inside() {
    assert_eq!(
        render("```\na\n\n\nb\n```"),
        "<pre><code>\na\n\n\nb\n</code></pre>"
    );
}

#[test]
fn fence_with_language_tag() {
    assert_eq!(
        render("```rust\nlet x = 1 < 2;\n```"),
        "<pre><code class=\"language-rust\">let x = 1 &lt; 2;\n</code></pre>"
    );
}

#[test]
fn unterminated_fence_falls_through() {
    assert_eq!(render("```\n# heading"), "<p>```<br># heading</p>");
}

#[test]
fn unterminated_fence_does_not_swallow_later_blocks() {
    assert_eq!(
        render("```\nopen\n\n# Later"),
        "<p>```<br>open</p><h1>Later</h1>"
    );
}

#[test]
fn fence_inside_paragraph_is_restored_in_place() {
    assert_eq!(
        render("see ```x``` here"),
        "<p>see <pre><code>x</code></pre> here</p>"
    );
}

#[test]
fn placeholder_lookalike_text_is_untouched() {
    assert_eq!(render("{{CODEBLOCK_0}}"), "<p>{{CODEBLOCK_0}}</p>");
}

#[test]
fn task_items() {
    assert_eq!(
        render("- [ ] a\n- [x] b\n- [X] c"),
        "<div class=\"task-item\"><input type=\"checkbox\" disabled> a</div>\n\
         <div class=\"task-item\"><input type=\"checkbox\" checked disabled> b</div>\n\
         <div class=\"task-item\"><input type=\"checkbox\" checked disabled> c</div>"
    );
}

#[test]
fn list_items_without_container() {
    assert_eq!(render("- a\n- b"), "<li>a</li>\n<li>b</li>");
}

#[test]
fn list_items_with_container() {
    let renderer = Renderer::with_options(RenderOptions {
        list_containers: true,
    });
    assert_eq!(
        renderer.render("- a\n- b\n\n1. one\n2. two"),
        "<ul><li>a</li><li>b</li></ul><ol><li>one</li><li>two</li></ol>"
    );
}

#[test]
fn blockquote() {
    assert_eq!(render("> hi *there*"), "<blockquote>hi <i>there</i></blockquote>");
}

#[test]
fn paragraph_keeps_line_breaks_and_collapses_spaces() {
    assert_eq!(render("one   two\nthree"), "<p>one two<br>three</p>");
}

#[test]
fn paragraph_escapes_markup() {
    assert_eq!(
        render("<script>alert(1)</script> & co"),
        "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</p>"
    );
}

#[test]
fn unpaired_markers_stay_literal() {
    assert_eq!(render("2 * 3 and [x"), "<p>2 * 3 and [x</p>");
}

#[test]
fn strikethrough_and_code() {
    assert_eq!(
        render("~~old~~ `new`"),
        "<p><del>old</del> <code>new</code></p>"
    );
}

#[test]
fn mixed_document() {
    assert_eq!(
        render("# Notes\n\nIntro with [link](http://a).\n\n- one\n- two\n\n|k|v|\n|x|1|"),
        "<h1>Notes</h1><p>Intro with <a href=\"http://a\" target=\"_blank\">link</a>.</p>\
         <li>one</li>\n<li>two</li>\
         <table><tbody><tr><td>k</td><td>v</td></tr><tr><td>x</td><td>1</td></tr></tbody></table>"
    );
}

#[test]
fn table_pass_is_idempotent_on_rendered_output() {
    let html = render("|a|b|\n|c|d|\n\ntext\n\n|e|");
    assert_eq!(assemble_tables(&html), html);
}

#[test]
fn render_is_repeatable() {
    let doc = "# t\n\n```\ncode\n```\n\n- [x] done";
    assert_eq!(render(doc), render(doc));
}
