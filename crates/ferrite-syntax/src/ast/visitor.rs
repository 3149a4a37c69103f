//! Preorder visitor over the typed tree.

use super::{
    ArgList, AstNode, BinaryExpr, Block, BreakExpr, CallExpr, ConstItem, ContinueExpr, EnumItem,
    ExprStmt, FieldExpr, FnItem, ForExpr, GenericParamList, IfExpr, ImplItem, ItemList, LetStmt,
    LifetimeParam, Literal, LoopExpr, ModItem, Name, Param, ParamList, ParenExpr, Path, PathExpr,
    PathSegment, PathType, PrefixExpr, RecordField, RecordFieldList, RefType, RetType, ReturnExpr,
    SourceFile, StaticItem, StructItem, TraitItem, TraitRef, TupleType, TypeParam, UseItem,
    Variant, VariantList, WhileExpr,
};
use crate::SyntaxKind::*;
use crate::{SyntaxNode, WalkEvent};

/// Callbacks invoked by [`walk`], one per production plus a catch-all for
/// error nodes. Every method defaults to doing nothing, so implementors
/// override only the productions they care about.
#[allow(unused_variables)]
pub trait Visitor<'a> {
    fn visit_source_file(&mut self, node: SourceFile<'a>) {}
    fn visit_fn_item(&mut self, node: FnItem<'a>) {}
    fn visit_struct_item(&mut self, node: StructItem<'a>) {}
    fn visit_enum_item(&mut self, node: EnumItem<'a>) {}
    fn visit_impl_item(&mut self, node: ImplItem<'a>) {}
    fn visit_trait_item(&mut self, node: TraitItem<'a>) {}
    fn visit_trait_ref(&mut self, node: TraitRef<'a>) {}
    fn visit_mod_item(&mut self, node: ModItem<'a>) {}
    fn visit_use_item(&mut self, node: UseItem<'a>) {}
    fn visit_const_item(&mut self, node: ConstItem<'a>) {}
    fn visit_static_item(&mut self, node: StaticItem<'a>) {}
    fn visit_item_list(&mut self, node: ItemList<'a>) {}
    fn visit_name(&mut self, node: Name<'a>) {}
    fn visit_generic_param_list(&mut self, node: GenericParamList<'a>) {}
    fn visit_type_param(&mut self, node: TypeParam<'a>) {}
    fn visit_lifetime_param(&mut self, node: LifetimeParam<'a>) {}
    fn visit_param_list(&mut self, node: ParamList<'a>) {}
    fn visit_param(&mut self, node: Param<'a>) {}
    fn visit_ret_type(&mut self, node: RetType<'a>) {}
    fn visit_record_field_list(&mut self, node: RecordFieldList<'a>) {}
    fn visit_record_field(&mut self, node: RecordField<'a>) {}
    fn visit_variant_list(&mut self, node: VariantList<'a>) {}
    fn visit_variant(&mut self, node: Variant<'a>) {}
    fn visit_path(&mut self, node: Path<'a>) {}
    fn visit_path_segment(&mut self, node: PathSegment<'a>) {}
    fn visit_path_type(&mut self, node: PathType<'a>) {}
    fn visit_ref_type(&mut self, node: RefType<'a>) {}
    fn visit_tuple_type(&mut self, node: TupleType<'a>) {}
    fn visit_literal(&mut self, node: Literal<'a>) {}
    fn visit_path_expr(&mut self, node: PathExpr<'a>) {}
    fn visit_call_expr(&mut self, node: CallExpr<'a>) {}
    fn visit_arg_list(&mut self, node: ArgList<'a>) {}
    fn visit_field_expr(&mut self, node: FieldExpr<'a>) {}
    fn visit_prefix_expr(&mut self, node: PrefixExpr<'a>) {}
    fn visit_binary_expr(&mut self, node: BinaryExpr<'a>) {}
    fn visit_paren_expr(&mut self, node: ParenExpr<'a>) {}
    fn visit_block(&mut self, node: Block<'a>) {}
    fn visit_if_expr(&mut self, node: IfExpr<'a>) {}
    fn visit_loop_expr(&mut self, node: LoopExpr<'a>) {}
    fn visit_while_expr(&mut self, node: WhileExpr<'a>) {}
    fn visit_for_expr(&mut self, node: ForExpr<'a>) {}
    fn visit_break_expr(&mut self, node: BreakExpr<'a>) {}
    fn visit_continue_expr(&mut self, node: ContinueExpr<'a>) {}
    fn visit_return_expr(&mut self, node: ReturnExpr<'a>) {}
    fn visit_let_stmt(&mut self, node: LetStmt<'a>) {}
    fn visit_expr_stmt(&mut self, node: ExprStmt<'a>) {}

    /// Called for nodes the parser produced during error recovery.
    fn visit_error(&mut self, node: SyntaxNode<'a>) {}
}

/// Walks the subtree under `node` in preorder, dispatching each entered node
/// to the matching [`Visitor`] method.
pub fn walk<'a, V: Visitor<'a>>(visitor: &mut V, node: SyntaxNode<'a>) {
    for event in node.preorder() {
        let WalkEvent::Enter(node) = event else { continue };
        dispatch(visitor, node);
    }
}

fn dispatch<'a, V: Visitor<'a>>(visitor: &mut V, node: SyntaxNode<'a>) {
    macro_rules! call {
        ($method:ident, $ty:ident) => {
            visitor.$method($ty::cast(node).unwrap())
        };
    }

    match node.kind() {
        SOURCE_FILE => call!(visit_source_file, SourceFile),
        FN_ITEM => call!(visit_fn_item, FnItem),
        STRUCT_ITEM => call!(visit_struct_item, StructItem),
        ENUM_ITEM => call!(visit_enum_item, EnumItem),
        IMPL_ITEM => call!(visit_impl_item, ImplItem),
        TRAIT_ITEM => call!(visit_trait_item, TraitItem),
        TRAIT_REF => call!(visit_trait_ref, TraitRef),
        MOD_ITEM => call!(visit_mod_item, ModItem),
        USE_ITEM => call!(visit_use_item, UseItem),
        CONST_ITEM => call!(visit_const_item, ConstItem),
        STATIC_ITEM => call!(visit_static_item, StaticItem),
        ITEM_LIST => call!(visit_item_list, ItemList),
        NAME => call!(visit_name, Name),
        GENERIC_PARAM_LIST => call!(visit_generic_param_list, GenericParamList),
        TYPE_PARAM => call!(visit_type_param, TypeParam),
        LIFETIME_PARAM => call!(visit_lifetime_param, LifetimeParam),
        PARAM_LIST => call!(visit_param_list, ParamList),
        PARAM => call!(visit_param, Param),
        RET_TYPE => call!(visit_ret_type, RetType),
        RECORD_FIELD_LIST => call!(visit_record_field_list, RecordFieldList),
        RECORD_FIELD => call!(visit_record_field, RecordField),
        VARIANT_LIST => call!(visit_variant_list, VariantList),
        VARIANT => call!(visit_variant, Variant),
        PATH => call!(visit_path, Path),
        PATH_SEGMENT => call!(visit_path_segment, PathSegment),
        PATH_TYPE => call!(visit_path_type, PathType),
        REF_TYPE => call!(visit_ref_type, RefType),
        TUPLE_TYPE => call!(visit_tuple_type, TupleType),
        LITERAL => call!(visit_literal, Literal),
        PATH_EXPR => call!(visit_path_expr, PathExpr),
        CALL_EXPR => call!(visit_call_expr, CallExpr),
        ARG_LIST => call!(visit_arg_list, ArgList),
        FIELD_EXPR => call!(visit_field_expr, FieldExpr),
        PREFIX_EXPR => call!(visit_prefix_expr, PrefixExpr),
        BINARY_EXPR => call!(visit_binary_expr, BinaryExpr),
        PAREN_EXPR => call!(visit_paren_expr, ParenExpr),
        BLOCK => call!(visit_block, Block),
        IF_EXPR => call!(visit_if_expr, IfExpr),
        LOOP_EXPR => call!(visit_loop_expr, LoopExpr),
        WHILE_EXPR => call!(visit_while_expr, WhileExpr),
        FOR_EXPR => call!(visit_for_expr, ForExpr),
        BREAK_EXPR => call!(visit_break_expr, BreakExpr),
        CONTINUE_EXPR => call!(visit_continue_expr, ContinueExpr),
        RETURN_EXPR => call!(visit_return_expr, ReturnExpr),
        LET_STMT => call!(visit_let_stmt, LetStmt),
        EXPR_STMT => call!(visit_expr_stmt, ExprStmt),
        ERROR => visitor.visit_error(node),
        _ => {}
    }
}
