//! Client-side representation of a named partition within a table.

use std::fmt;

use serde::{Deserialize, Serialize};
use snafu::{ensure, Snafu};
use tracing::warn;

/// Partition construction errors.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Table name must not be empty"))]
    EmptyTableName {},

    #[snafu(display("Partition name must not be empty"))]
    EmptyPartitionName {},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Identifies a partition of a table in the vector database: the owning
/// table, the partition's own name, and the tag the service uses to route
/// or filter against it.
///
/// A `Partition` is pure data. Once built it never changes, so a single
/// instance can be shared freely across threads.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// The name of the table this partition belongs to
    table_name: String,

    /// The name of this partition within the table
    partition_name: String,

    /// The routing/filter tag. The service defines its semantics; an empty
    /// tag is accepted here.
    tag: String,
}

impl Partition {
    /// Create a builder holding the three required values.
    ///
    /// ```
    /// use vectordb_client_types::Partition;
    ///
    /// let partition = Partition::builder("orders", "2024Q1", "region=us")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(partition.table_name(), "orders");
    /// assert_eq!(partition.partition_name(), "2024Q1");
    /// assert_eq!(partition.tag(), "region=us");
    /// ```
    pub fn builder(
        table_name: impl Into<String>,
        partition_name: impl Into<String>,
        tag: impl Into<String>,
    ) -> PartitionBuilder {
        PartitionBuilder::new(table_name, partition_name, tag)
    }

    /// The name of the owning table
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The name of the partition within the table
    pub fn partition_name(&self) -> &str {
        &self.partition_name
    }

    /// The partition tag
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

// Diagnostic rendering only. The format is fixed but not meant to be
// parsed, and it is not the wire representation.
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Partition{{tableName='{}', partitionName='{}', tag='{}'}}",
            self.table_name, self.partition_name, self.tag
        )
    }
}

/// Gathers the values for a `Partition`.
///
/// Create this via `Partition::builder`. All three values are required up
/// front; validation happens in `build`, which consumes the builder, so a
/// built `Partition` is independent of it.
#[derive(Debug)]
pub struct PartitionBuilder {
    table_name: String,
    partition_name: String,
    tag: String,
}

impl PartitionBuilder {
    fn new(
        table_name: impl Into<String>,
        partition_name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            partition_name: partition_name.into(),
            tag: tag.into(),
        }
    }

    /// Constructs the partition, rejecting absent identifiers. The tag may
    /// be any string; an empty tag is tolerated but logged, as the service
    /// decides what it means.
    pub fn build(self) -> Result<Partition> {
        ensure!(!self.table_name.is_empty(), EmptyTableName);
        ensure!(!self.partition_name.is_empty(), EmptyPartitionName);

        if self.tag.is_empty() {
            warn!(
                "Empty tag for partition '{}' of table '{}'",
                self.partition_name, self.table_name
            );
        }

        let Self {
            table_name,
            partition_name,
            tag,
        } = self;

        Ok(Partition {
            table_name,
            partition_name,
            tag,
        })
    }
}
