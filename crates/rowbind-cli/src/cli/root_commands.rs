use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a raw SQL batch, e.g. CREATE TABLE statements
    Exec {
        /// SQL text; several statements may be separated by ';'
        sql: String,
    },

    /// Build an entity from a JSON object and save it (insert or update)
    Save {
        /// Entity type name, e.g. Post
        model: String,
        /// Attributes as a JSON object, e.g. '{"title": "Le Wagon"}'
        attributes: String,
    },

    /// Look up one entity by identity
    Find {
        /// Entity type name
        model: String,
        /// Identity value (integer, finite float, or text; leading-zero numerals stay text)
        id: String,
    },

    /// List every entity of a type
    All {
        /// Entity type name
        model: String,
    },

    /// Delete the row with the given identity and report the deleted row count
    Destroy {
        /// Entity type name
        model: String,
        /// Identity value (integer, finite float, or text; leading-zero numerals stay text)
        id: String,
    },
}
