use super::*;

// VariableList : IDENTIFIER ( COMMA IDENTIFIER )* ;
pub fn handle_variable_list(context: &mut Context) {
    context.expect(TokenKind::Identifier);
    while context.at(TokenKind::Comma) {
        context.consume();
        context.expect(TokenKind::Identifier);
    }
}
