//! Hardware components attached to a computer: CPU, memory and disks.

use std::fmt;

use tracing::trace;

use crate::domain::error::{require_non_blank, DomainResult};
use crate::domain::printable::impl_display_via_printable;
use crate::domain::tree_format::{self, child_prefix, connector};
use crate::domain::Printable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    cores: u32,
    mhz: u32,
}

impl Cpu {
    pub fn new(cores: u32, mhz: u32) -> Self {
        Self { cores, mhz }
    }

    pub fn cores(&self) -> u32 {
        self.cores
    }

    pub fn mhz(&self) -> u32 {
        self.mhz
    }

    pub fn label(&self) -> String {
        format!("CPU, {} cores @ {}MHz", self.cores, self.mhz)
    }
}

impl Printable for Cpu {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", connector(is_last), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memory {
    size_mib: u64,
}

impl Memory {
    pub fn new(size_mib: u64) -> Self {
        Self { size_mib }
    }

    pub fn size_mib(&self) -> u64 {
        self.size_mib
    }

    pub fn label(&self) -> String {
        format!("Memory, {} MiB", self.size_mib)
    }
}

impl Printable for Memory {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", connector(is_last), self.label())
    }
}

/// Storage technology of a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Ssd,
    Magnetic,
}

impl StorageKind {
    /// Label used in the rendered tree.
    pub fn label(self) -> &'static str {
        match self {
            StorageKind::Ssd => "SSD",
            StorageKind::Magnetic => "HDD",
        }
    }
}

/// A named slice of a disk. Its index is its position on the disk, not a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    size_gib: u64,
    name: String,
}

impl Partition {
    pub fn new(size_gib: u64, name: impl Into<String>) -> Self {
        Self {
            size_gib,
            name: name.into(),
        }
    }

    pub fn size_gib(&self) -> u64 {
        self.size_gib
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tree line for the partition at position `index` on its disk.
    pub fn label(&self, index: usize) -> String {
        format!("[{index}]: {} GiB, {}", self.size_gib, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    kind: StorageKind,
    size_gib: u64,
    partitions: Vec<Partition>,
}

impl Disk {
    pub fn new(kind: StorageKind, size_gib: u64) -> Self {
        Self {
            kind,
            size_gib,
            partitions: Vec::new(),
        }
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn size_gib(&self) -> u64 {
        self.size_gib
    }

    pub fn label(&self) -> String {
        format!("{}, {} GiB", self.kind.label(), self.size_gib)
    }

    /// Partitions in insertion order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Append a partition.
    pub fn add_partition(&mut self, size_gib: u64, name: impl Into<String>) -> &mut Self {
        let partition = Partition::new(size_gib, name);
        trace!(size_gib, partition = partition.name(), "add partition");
        self.partitions.push(partition);
        self
    }

    /// Owned variant of [`Disk::add_partition`] for building a disk in one expression.
    pub fn with_partition(mut self, size_gib: u64, name: impl Into<String>) -> Self {
        self.add_partition(size_gib, name);
        self
    }

    /// Like [`Disk::add_partition`] but rejects a blank partition name.
    pub fn try_add_partition(
        &mut self,
        size_gib: u64,
        name: impl Into<String>,
    ) -> DomainResult<&mut Self> {
        let name = name.into();
        require_non_blank("partition name", &name)?;
        Ok(self.add_partition(size_gib, name))
    }
}

impl Printable for Disk {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", connector(is_last), self.label())?;

        let part_prefix = child_prefix(prefix, is_last);
        let count = self.partitions.len();
        for (index, partition) in self.partitions.iter().enumerate() {
            writeln!(
                out,
                "{part_prefix}{}{}",
                connector(tree_format::is_last(index, count)),
                partition.label(index)
            )?;
        }
        Ok(())
    }
}

/// A hardware unit attached to a computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Disk(Disk),
}

impl Component {
    pub fn as_disk(&self) -> Option<&Disk> {
        match self {
            Component::Disk(disk) => Some(disk),
            _ => None,
        }
    }

    pub fn as_disk_mut(&mut self) -> Option<&mut Disk> {
        match self {
            Component::Disk(disk) => Some(disk),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Component::Cpu(cpu) => cpu.label(),
            Component::Memory(memory) => memory.label(),
            Component::Disk(disk) => disk.label(),
        }
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Component::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Component::Memory(memory)
    }
}

impl From<Disk> for Component {
    fn from(disk: Disk) -> Self {
        Component::Disk(disk)
    }
}

impl Printable for Component {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        match self {
            Component::Cpu(cpu) => cpu.render(out, prefix, is_last),
            Component::Memory(memory) => memory.render(out, prefix, is_last),
            Component::Disk(disk) => disk.render(out, prefix, is_last),
        }
    }
}

impl_display_via_printable!(Cpu, Memory, Disk, Component);
