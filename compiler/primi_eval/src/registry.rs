//! Handler registry for looking up node handlers by kind.

use primi_ir::NodeKind;
use rustc_hash::FxHashMap;

use crate::handlers::{
    AdditionHandler, AnonymousFunctionHandler, AssignmentHandler, BlockHandler,
    BoolLiteralHandler, ComparisonHandler, DereferenceHandler, ForeachHandler,
    FunctionCallHandler, MultiplicationHandler, NodeHandler, NullLiteralHandler,
    NumberLiteralHandler, OperatorHandler, ProgramHandler, RegexLiteralHandler, StringLiteralHandler,
    VariableHandler,
};

// Static handler instances for 'static lifetime references
static PROGRAM: ProgramHandler = ProgramHandler;
static BLOCK: BlockHandler = BlockHandler;
static STRING_LITERAL: StringLiteralHandler = StringLiteralHandler;
static NUMBER_LITERAL: NumberLiteralHandler = NumberLiteralHandler;
static BOOL_LITERAL: BoolLiteralHandler = BoolLiteralHandler;
static NULL_LITERAL: NullLiteralHandler = NullLiteralHandler;
static REGEX_LITERAL: RegexLiteralHandler = RegexLiteralHandler;
static VARIABLE: VariableHandler = VariableHandler;
static ASSIGNMENT: AssignmentHandler = AssignmentHandler;
static ADDITION: AdditionHandler = AdditionHandler;
static MULTIPLICATION: MultiplicationHandler = MultiplicationHandler;
static COMPARISON: ComparisonHandler = ComparisonHandler;
static DEREFERENCE: DereferenceHandler = DereferenceHandler;
static ANONYMOUS_FUNCTION: AnonymousFunctionHandler = AnonymousFunctionHandler;
static FUNCTION_CALL: FunctionCallHandler = FunctionCallHandler;
static FOREACH: ForeachHandler = ForeachHandler;
static OPERATOR: OperatorHandler = OperatorHandler;

/// Registry mapping `NodeKind` to node handlers.
///
/// Built-in handlers are ZSTs with static lifetime, selected by direct enum
/// dispatch. An embedder may replace the handler of any kind with
/// [`HandlerRegistry::with_handler`]; replacements are consulted first.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    overrides: FxHashMap<NodeKind, &'static dyn NodeHandler>,
}

impl HandlerRegistry {
    /// A registry with every built-in handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the handler for `kind`.
    #[must_use]
    pub fn with_handler(mut self, kind: NodeKind, handler: &'static dyn NodeHandler) -> Self {
        self.overrides.insert(kind, handler);
        self
    }

    /// Get the handler for a given kind.
    pub fn get(&self, kind: NodeKind) -> &'static dyn NodeHandler {
        if let Some(handler) = self.overrides.get(&kind) {
            return *handler;
        }
        Self::builtin(kind)
    }

    /// Whether `kind` uses a replacement handler.
    pub fn is_overridden(&self, kind: NodeKind) -> bool {
        self.overrides.contains_key(&kind)
    }

    fn builtin(kind: NodeKind) -> &'static dyn NodeHandler {
        match kind {
            NodeKind::Program => &PROGRAM,
            NodeKind::Block => &BLOCK,
            NodeKind::StringLiteral => &STRING_LITERAL,
            NodeKind::NumberLiteral => &NUMBER_LITERAL,
            NodeKind::BoolLiteral => &BOOL_LITERAL,
            NodeKind::NullLiteral => &NULL_LITERAL,
            NodeKind::RegexLiteral => &REGEX_LITERAL,
            NodeKind::Variable => &VARIABLE,
            NodeKind::Assignment => &ASSIGNMENT,
            NodeKind::Addition => &ADDITION,
            NodeKind::Multiplication => &MULTIPLICATION,
            NodeKind::Comparison => &COMPARISON,
            NodeKind::Dereference => &DEREFERENCE,
            NodeKind::AnonymousFunction => &ANONYMOUS_FUNCTION,
            NodeKind::FunctionCall => &FUNCTION_CALL,
            NodeKind::Foreach => &FOREACH,
            NodeKind::Operator => &OPERATOR,
        }
    }

    /// Get all node kinds with a handler.
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL.into_iter()
    }

    pub fn len(&self) -> usize {
        NodeKind::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
