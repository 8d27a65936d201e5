use super::{CallMethod, Instruction, JsonReturn};

/// Defines the instruction kinds, their palette descriptions and their constructors
/// as one fixed table.
macro_rules! define_instruction_kinds {
    ( $( ($variant:ident, $description:expr, $create:path) ),* $(,)? ) => {
        /// The variants an editor can offer for insertion.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum InstructionKind {
            $( $variant, )*
        }

        impl InstructionKind {
            /// Every kind, in palette order.
            pub const ALL: &'static [InstructionKind] = &[ $( InstructionKind::$variant, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( InstructionKind::$variant => stringify!($variant), )*
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $( InstructionKind::$variant => $description, )*
                }
            }

            /// Creates a blank instruction of this kind with a fresh id.
            pub fn create(self) -> Instruction {
                match self {
                    $( InstructionKind::$variant => $create(), )*
                }
            }

            pub fn from_name(name: &str) -> Option<InstructionKind> {
                match name {
                    $( stringify!($variant) => Some(InstructionKind::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_instruction_kinds! {
    (CallMethod, "Call a method from a config", CallMethod::create),
    (JsonReturn, "Return a JSON value", JsonReturn::create),
}

impl Instruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::CallMethod(_) => InstructionKind::CallMethod,
            Instruction::JsonReturn(_) => InstructionKind::JsonReturn,
        }
    }
}
