//! Render context: setup walk, render dispatch and shared render state

use crate::simark::ast::{Chunk, ChunkKind, RenderMeta};
use crate::simark::config::RenderConfig;
use crate::simark::counters::Counters;
use crate::simark::environment::{keys, Environment, Value};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::variables::{Builtin, Variables};
use crate::simark::table::render as table_render;
use tracing::{debug, trace};

/// Output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Html,
    Plain,
}

#[derive(Debug)]
pub struct RenderContext {
    target: Target,
    config: RenderConfig,
    env: Environment,
    pub counters: Counters,
    pub variables: Variables,
}

impl RenderContext {
    pub fn new(target: Target, config: RenderConfig) -> Self {
        RenderContext {
            target,
            config,
            env: Environment::new(),
            counters: Counters::new(),
            variables: Variables::new(),
        }
    }

    pub fn html() -> Self {
        Self::new(Target::Html, RenderConfig::default())
    }

    pub fn plain() -> Self {
        Self::new(Target::Plain, RenderConfig::default())
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resets counters and the walk environment. Variables persist.
    pub fn reset(&mut self) {
        self.counters.reset();
        self.env = Environment::new();
    }

    /// Setup walk followed by the render walk.
    pub fn run(&mut self, root: &mut Chunk) -> String {
        self.reset();
        self.setup(root);
        self.reset();
        let out = self.render(root);
        debug!(target_format = ?self.target, bytes = out.len(), "rendered document");
        out
    }

    /// Attaches render metadata and runs the setup hooks over `chunk` and its subtree.
    pub fn setup(&mut self, chunk: &mut Chunk) {
        let depth = self
            .env
            .get(keys::DEPTH)
            .and_then(Value::as_int)
            .unwrap_or(0);
        let compact = self.env.flag(keys::COMPACT);
        chunk.meta = RenderMeta {
            depth: depth.max(0) as usize,
            compact,
        };
        let Chunk { kind, children, .. } = chunk;
        self.enter(kind, children);
        let mut frame = vec![(keys::DEPTH, Value::Int(depth + 1))];
        if matches!(kind, ChunkKind::Cell(_)) {
            frame.push((keys::COMPACT, Value::Bool(true)));
        }
        self.env.push(frame);
        for child in children.iter_mut() {
            self.setup(child);
        }
        self.env.pop();
        self.exit(kind);
    }

    fn enter(&mut self, kind: &mut ChunkKind, children: &[Chunk]) {
        match kind {
            ChunkKind::Element(element) => element.kind.setup_enter(children, self),
            ChunkKind::Table(table) => {
                self.counters.enter_table();
                table.number = self.table_text();
            }
            _ => {}
        }
    }

    fn exit(&mut self, kind: &mut ChunkKind) {
        match kind {
            ChunkKind::Element(element) => element.kind.setup_exit(self),
            ChunkKind::Table(_) => self.counters.exit_table(),
            _ => {}
        }
    }

    pub fn render(&self, chunk: &Chunk) -> String {
        match self.target {
            Target::Html => self.render_html(chunk),
            Target::Plain => self.render_plain(chunk),
        }
    }

    pub fn render_children(&self, chunk: &Chunk) -> String {
        chunk.children.iter().map(|c| self.render(c)).collect()
    }

    fn render_html(&self, chunk: &Chunk) -> String {
        match &chunk.kind {
            ChunkKind::Text(text) => escape_html(text),
            ChunkKind::Break => "\n".to_string(),
            ChunkKind::Unknown { closed } => {
                let close = if *closed { "}" } else { "" };
                format!("{{{}{close}", self.render_children(chunk))
            }
            ChunkKind::Paragraph => {
                let (indent, nl) = self.whitespace(chunk);
                format!(
                    "{indent}<p{}>{}</p>{nl}",
                    self.class_attr("paragraph"),
                    self.render_children(chunk).trim()
                )
            }
            ChunkKind::Element(element) => element.kind.render_html(chunk, self),
            ChunkKind::Table(table) => table_render::render_html(chunk, table, self),
            _ => self.render_children(chunk),
        }
    }

    fn render_plain(&self, chunk: &Chunk) -> String {
        match &chunk.kind {
            ChunkKind::Text(text) => text.clone(),
            ChunkKind::Break => "\n".to_string(),
            ChunkKind::Unknown { closed } => {
                let close = if *closed { "}" } else { "" };
                format!("{{{}{close}", self.render_children(chunk))
            }
            ChunkKind::Paragraph => format!("{}\n\n", self.render_children(chunk).trim()),
            ChunkKind::Element(element) => element.kind.render_plain(chunk, self),
            ChunkKind::Table(table) => table_render::render_plain(chunk, table, self),
            _ => self.render_children(chunk),
        }
    }

    /// Indentation and line end for `chunk`; both empty in compact mode.
    pub fn whitespace(&self, chunk: &Chunk) -> (String, &'static str) {
        if chunk.meta.compact {
            (String::new(), "")
        } else {
            (self.config.indent.repeat(chunk.meta.depth), "\n")
        }
    }

    /// ` class="<prefix><name>"`
    pub fn class_attr(&self, name: &str) -> String {
        format!(
            " class=\"{}{}\"",
            escape_html(&self.config.html_class_prefix),
            escape_html(name)
        )
    }

    pub fn section_text(&self) -> String {
        self.counters.section.text(&self.config.section_separator)
    }

    pub fn list_text(&self) -> String {
        self.counters.list.text(&self.config.list_separator)
    }

    pub fn table_text(&self) -> String {
        self.counters.table_text(&self.config.table_separator)
    }

    pub fn figure_text(&self) -> String {
        self.counters.figure_text(&self.config.figure_separator)
    }

    pub fn get_var(&self, name: &str) -> String {
        match Builtin::from_name(name) {
            Some(Builtin::Section) => self.section_text(),
            Some(Builtin::Table) => self.table_text(),
            Some(Builtin::Figure) => self.figure_text(),
            Some(Builtin::List) => self.list_text(),
            None => self.variables.get(name).unwrap_or_default().to_string(),
        }
    }

    pub fn set_var(&mut self, name: &str, value: String) {
        if Builtin::from_name(name).is_some() {
            trace!(name, "assignment to built-in variable ignored");
            return;
        }
        self.variables.set(name, value);
    }

    pub fn inc_var(&mut self, name: &str) {
        let level = self.counters.section.level();
        match Builtin::from_name(name) {
            Some(Builtin::Table) => self.counters.table.inc(level),
            Some(Builtin::Figure) => self.counters.figure.inc(level),
            Some(Builtin::List) => self.counters.list.inc(),
            Some(Builtin::Section) => trace!("section counter cannot be incremented directly"),
            None => {
                if !self.variables.inc(name) {
                    trace!(name, "non-numeric variable not incremented");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_records_depth_and_compact() {
        let mut root = Chunk::with_children(
            0..3,
            ChunkKind::Document,
            vec![Chunk::with_children(
                0..3,
                ChunkKind::Cell(Default::default()),
                vec![Chunk::text(0..3, "abc")],
            )],
        );
        let mut ctx = RenderContext::html();
        ctx.setup(&mut root);
        assert_eq!(root.meta, RenderMeta { depth: 0, compact: false });
        assert_eq!(root.children[0].meta, RenderMeta { depth: 1, compact: false });
        assert_eq!(
            root.children[0].children[0].meta,
            RenderMeta { depth: 2, compact: true }
        );
    }

    #[test]
    fn builtin_variables_read_counters() {
        let mut ctx = RenderContext::html();
        ctx.counters.enter_section(Some(3));
        ctx.inc_var("table");
        assert_eq!(ctx.get_var("section"), "3");
        assert_eq!(ctx.get_var("table"), "3-2");
        ctx.set_var("section", "x".into());
        assert_eq!(ctx.get_var("section"), "3");
        ctx.set_var("who", "me".into());
        assert_eq!(ctx.get_var("who"), "me");
        assert_eq!(ctx.get_var("nobody"), "");
    }

    #[test]
    fn unknown_groups_render_their_braces() {
        let chunk = Chunk::with_children(
            0..4,
            ChunkKind::Unknown { closed: false },
            vec![Chunk::text(1..4, "a<b")],
        );
        assert_eq!(RenderContext::html().render(&chunk), "{a&lt;b");
        assert_eq!(RenderContext::plain().render(&chunk), "{a<b");
    }
}
