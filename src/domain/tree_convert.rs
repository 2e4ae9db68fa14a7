//! Conversion of inventory entities into `termtree` trees.
//!
//! With [`ASCII_GLYPHS`] a converted network prints exactly like
//! [`Printable::to_display_string`](crate::domain::Printable::to_display_string)
//! plus one trailing newline.

use termtree::{GlyphPalette, Tree};
use tracing::instrument;

use crate::domain::{Address, Component, Computer, Disk, Network};

/// `+-` / `\-` connectors with `| ` and two-space continuation.
pub const ASCII_GLYPHS: GlyphPalette = GlyphPalette {
    middle_item: "+",
    last_item: "\\",
    item_indent: "-",
    middle_skip: "|",
    last_skip: " ",
    skip_indent: " ",
};

pub trait TreeConvert {
    fn to_tree(&self) -> Tree<String>;
}

fn node(label: String) -> Tree<String> {
    Tree::new(label).with_glyphs(ASCII_GLYPHS)
}

impl TreeConvert for Address {
    fn to_tree(&self) -> Tree<String> {
        node(self.as_str().to_string())
    }
}

impl TreeConvert for Disk {
    fn to_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .partitions()
            .iter()
            .enumerate()
            .map(|(index, partition)| node(partition.label(index)))
            .collect();
        node(self.label()).with_leaves(leaves)
    }
}

impl TreeConvert for Component {
    fn to_tree(&self) -> Tree<String> {
        match self {
            Component::Disk(disk) => disk.to_tree(),
            other => node(other.label()),
        }
    }
}

impl TreeConvert for Computer {
    fn to_tree(&self) -> Tree<String> {
        // Addresses and components share one child list, so the last address
        // only gets the terminal glyph when no component follows it.
        let leaves: Vec<_> = self
            .addresses()
            .iter()
            .map(TreeConvert::to_tree)
            .chain(self.components().iter().map(TreeConvert::to_tree))
            .collect();
        node(self.label()).with_leaves(leaves)
    }
}

impl TreeConvert for Network {
    #[instrument(level = "debug", skip(self), fields(network = self.name()))]
    fn to_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.computers().iter().map(TreeConvert::to_tree).collect();
        node(self.label()).with_leaves(leaves)
    }
}
