use crate::ir::{ArgValue, Instruction};

/// What a rename-cascade touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Number of `Parameter` arguments rewritten.
    pub rewritten: usize,
    /// Position of the instruction that re-bound the old name, if any.
    pub shadowed_at: Option<usize>,
}

/// Rewrites forward references after the output of the call at `index` was
/// renamed from `old` to `new`.
///
/// The walk starts right after `index`. Every `Parameter` argument of a later
/// call that names `old` is pointed at `new`. A call whose own output is `old`
/// re-binds the name: its arguments are still rewritten, then the walk stops.
/// Literals and `JsonReturn` instructions are left alone.
///
/// The shadow check always compares against the `old` captured here; renames
/// do not chain within one walk.
pub fn rename_cascade(
    instructions: &mut [Instruction],
    index: usize,
    old: &str,
    new: &str,
) -> CascadeReport {
    let mut report = CascadeReport::default();

    for (position, instruction) in instructions.iter_mut().enumerate().skip(index + 1) {
        let Instruction::CallMethod(call) = instruction else {
            continue;
        };

        for argument in &mut call.arguments {
            match &mut argument.value {
                ArgValue::Parameter(name) if *name == old => {
                    *name = new.to_string();
                    report.rewritten += 1;
                }
                ArgValue::Parameter(_) | ArgValue::Literal(_) | ArgValue::Unset => {}
            }
        }

        if call.output_name.as_deref() == Some(old) {
            report.shadowed_at = Some(position);
            break;
        }
    }

    log::debug!(
        "Renamed '{}' -> '{}' after position {}: {} reference(s) rewritten, shadowed at {:?}",
        old,
        new,
        index,
        report.rewritten,
        report.shadowed_at
    );
    report
}
