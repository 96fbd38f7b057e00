//! 巴西葡萄牙语文本 (pt-BR)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmDeleteTexts, FormTexts, HelpTexts, HintTexts, KeyNames,
    ModalTexts, RecordsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Cadastro de Usuários",
        cancel: "Cancelar",
        quit: "Sair",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            arrows_lr: "←→",
            edit: "e",
            delete: "d",
            filter: "/",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "Alternar painel",
            next_field: "Campo",
            submit: "Enviar",
            select: "Selecionar",
            switch_option: "Alternar",
            apply: "Aplicar",
            clear: "Limpar",
        },
    },

    // ========================================================================
    // 面板文本
    // ========================================================================
    form: FormTexts {
        title: "Formulário",
        name: "Nome",
        email: "Email",
        phone: "Telefone",
        create: "Adicionar",
        update: "Atualizar",
        editing: "Editando",
    },

    records: RecordsTexts {
        title: "Usuários",
        empty: "Nenhum usuário cadastrado",
        no_match: "Nenhum usuário corresponde ao filtro",
        edit: "Editar",
        delete: "Excluir",
        filter: "Filtro",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirmação",
            message: "Deseja realmente excluir este usuário?",
            confirm_button: "Excluir",
            cancel_button: "Cancelar",
        },
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status: StatusTexts {
        created: "Usuário adicionado",
        updated: "Usuário atualizado",
        deleted: "Usuário excluído",
        filter_cleared: "Filtro removido",
    },

    help: HelpTexts {
        title: "Ajuda",
        global_shortcuts: "Geral",
        form_shortcuts: "Formulário",
        list_shortcuts: "Lista",
        close_hint: "Pressione Esc para fechar",
    },
};
