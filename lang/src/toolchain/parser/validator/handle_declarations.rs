use super::*;

// Declarations : ( VAR VariableList SEMICOLON )? ;
pub fn handle_declarations(context: &mut Context) {
    if !context.at(TokenKind::Var) {
        return;
    }
    context.consume();
    handle_variable_list::handle_variable_list(context);
    context.expect(TokenKind::Semicolon);
}
