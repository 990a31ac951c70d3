use std::fmt::Write;

use headless_runtime::Capabilities;

use crate::{naming, ExtendedSchema, FieldDefinition, Operation, Resolution, TypeDescriptor};

const DIRECTIVES: [&str; 4] = [
    "directive @property(path: String!) on FIELD_DEFINITION",
    "directive @resolver(name: String!) on FIELD_DEFINITION",
    "directive @paginateList(enabled: Boolean!) on FIELD_DEFINITION",
    "directive @afterware(name: String!) on FIELD_DEFINITION",
];

impl ExtendedSchema {
    /// Renders a self-contained SDL document: the field directives, the page interface when a
    /// hierarchical type implements it, the types and their query operations.
    pub fn export_sdl(&self) -> String {
        let mut sdl = String::new();

        for directive in DIRECTIVES {
            writeln!(sdl, "{directive}").ok();
        }
        writeln!(sdl).ok();

        let interface_fields = self.interface_fields();
        let has_interface = !interface_fields.is_empty();

        if has_interface {
            writeln!(sdl, "interface {} {{", self.interface_name()).ok();
            for field in interface_fields {
                writeln!(sdl, "\t{}: {}", field.name, field.ty).ok();
            }
            writeln!(sdl, "}}\n").ok();
        }

        for ty in self.types() {
            let implements = (has_interface && is_node(ty)).then_some(self.interface_name());
            export_type(ty, implements, &mut sdl);
        }

        let operations: Vec<String> = self.types().flat_map(export_operations).collect();

        if !operations.is_empty() {
            writeln!(sdl, "type Query {{").ok();
            for operation in operations {
                writeln!(sdl, "\t{operation}").ok();
            }
            writeln!(sdl, "}}").ok();
        }

        sdl
    }

    /// Fields every hierarchical type declares with the same type, in the order of the first one.
    fn interface_fields(&self) -> Vec<&FieldDefinition> {
        let mut nodes = self.types().filter(|ty| is_node(ty));

        let Some(first) = nodes.next() else {
            return Vec::new();
        };
        let rest: Vec<&TypeDescriptor> = nodes.collect();

        first
            .fields()
            .filter(|field| {
                rest.iter()
                    .all(|ty| ty.field(&field.name).is_some_and(|other| other.ty == field.ty))
            })
            .collect()
    }
}

fn is_node(ty: &TypeDescriptor) -> bool {
    ty.capabilities().contains(Capabilities::HIERARCHICAL_NODE)
}

fn export_type(ty: &TypeDescriptor, implements: Option<&str>, sdl: &mut String) {
    match implements {
        Some(interface) => writeln!(sdl, "type {} implements {interface} {{", ty.name()).ok(),
        None => writeln!(sdl, "type {} {{", ty.name()).ok(),
    };

    for field in ty.fields() {
        export_field(field, sdl);
    }

    writeln!(sdl, "}}\n").ok();
}

fn export_field(field: &FieldDefinition, sdl: &mut String) {
    write!(sdl, "\t{}: {}", field.name, field.ty).ok();

    match &field.resolution {
        Resolution::Default => {}
        Resolution::Property { path } => {
            write!(sdl, " @property(path: \"{}\")", path.escape_default()).ok();
        }
        Resolution::Resolver { binding } => {
            write!(sdl, " @resolver(name: \"{binding}\")").ok();
        }
    }

    if let Some(paginate) = field.plugins.paginate_list {
        write!(sdl, " @paginateList(enabled: {paginate})").ok();
    }

    if let Some(afterware) = field.afterware {
        write!(sdl, " @afterware(name: \"{}\")", afterware.name()).ok();
    }

    writeln!(sdl).ok();
}

fn export_operations(ty: &TypeDescriptor) -> Vec<String> {
    ty.operations()
        .iter()
        .map(|operation| match operation {
            Operation::Read => format!("{}: [{}!]!", naming::read_operation_name(ty.name()), ty.name()),
            Operation::ReadOne => format!("{}(id: ID!): {}", naming::read_one_operation_name(ty.name()), ty.name()),
        })
        .collect()
}
